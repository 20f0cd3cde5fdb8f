use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default, ToSchema)]
pub struct Category {
    pub id: i32,
    pub name: String,
}
