use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct GraphQlRequest<'a, V: Serialize> {
    pub query: &'a str,
    pub variables: V,
}

#[derive(Serialize, Debug, Clone)]
pub struct BoostsVariables {
    pub tag: String,
}

impl BoostsVariables {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
        }
    }
}
