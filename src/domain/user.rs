use serde::{Deserialize, Deserializer};

pub type UserId = u64;

/// One directory entry as served by the users endpoint.
///
/// The payload nests the city under `address`; everything else the endpoint
/// sends (phone, company, geo, ...) is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,

    #[serde(rename = "address", deserialize_with = "deserialize_city")]
    pub city: String,
}

#[derive(Deserialize)]
struct Address {
    city: String,
}

fn deserialize_city<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let address = Address::deserialize(deserializer)?;
    Ok(address.city)
}

impl User {
    pub fn new(id: UserId, name: &str, email: &str, city: &str) -> Self {
        User {
            id,
            name: name.to_string(),
            email: email.to_string(),
            city: city.to_string(),
        }
    }

    /// First character of the name, used as the avatar glyph.
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }

    pub fn name_length(&self) -> usize {
        self.name.chars().count()
    }
}
