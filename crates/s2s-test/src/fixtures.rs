use s2s::{Record, Reflect};

#[derive(Record, Clone, Default, Debug, PartialEq)]
pub struct Empty {}

#[derive(Record, Clone, Default, Debug, PartialEq)]
pub struct SimpleFrom {
  pub boolean: bool,
  pub string: String,
  pub int: i64,
  pub uint: u64,
  pub float: f32,
  pub character: char,
}

#[derive(Record, Clone, Default, Debug, PartialEq)]
pub struct SimpleTo {
  pub boolean: bool,
  pub string: String,
  pub int: i64,
  pub uint: u64,
  pub float: f32,
  pub character: char,
}

#[derive(Record, Clone, Default, Debug, PartialEq)]
pub struct SimpleToMissingField {
  pub boolean: bool,
  pub string: String,
  pub uint: u64,
  pub float: f32,
  pub character: char,
}

#[derive(Record, Clone, Default, Debug, PartialEq)]
pub struct SimpleToIndirectFields {
  pub boolean: Option<bool>,
  pub string: Option<String>,
  pub int: Option<i64>,
  pub uint: Option<u64>,
  pub float: Option<f32>,
  pub character: Option<char>,
}

#[derive(Record, Clone, Default, Debug, PartialEq)]
pub struct SimpleToDiffCase {
  #[s2s(rename = "BooLean")]
  pub boolean: bool,
  #[s2s(rename = "StrIng")]
  pub string: String,
  #[s2s(rename = "INT")]
  pub int: i64,
  #[s2s(rename = "Uint")]
  pub uint: u64,
  #[s2s(rename = "Float")]
  pub float: f32,
  #[s2s(rename = "ChaRacter")]
  pub character: char,
}

#[derive(Record, Clone, Default, Debug, PartialEq)]
pub struct EmbeddedTo {
  #[s2s(embed)]
  pub simple_to: SimpleTo,
}

#[derive(Record, Clone, Default, Debug, PartialEq)]
pub struct EmbeddedFrom {
  #[s2s(embed)]
  pub simple_from: SimpleFrom,
}

#[derive(Reflect, Clone, Debug, PartialEq)]
pub enum Status {
  Active,
  Disabled,
}

impl Default for Status {
  fn default() -> Self {
    Status::Active
  }
}

#[allow(clippy::approx_constant)]
pub fn example_from() -> SimpleFrom {
  SimpleFrom {
    boolean: true,
    string: "test".to_string(),
    int: -10,
    uint: 20,
    float: 3.14,
    character: 'x',
  }
}

#[allow(clippy::approx_constant)]
pub fn expected_to() -> SimpleTo {
  SimpleTo {
    boolean: true,
    string: "test".to_string(),
    int: -10,
    uint: 20,
    float: 3.14,
    character: 'x',
  }
}
