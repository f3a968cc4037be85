//! End-to-end tests of `s2s` through `#[derive(Record)]`.

#[cfg(test)]
mod fixtures;

#[cfg(test)]
mod mappers;
#[cfg(test)]
mod props;
