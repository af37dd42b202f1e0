use serde::{Deserialize, Deserializer};

/// Page size carrying an endpoint-specific default for when the query
/// parameter is absent.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Limit<const DEFAULT: u32>(u32);

impl<const DEFAULT: u32> Limit<DEFAULT> {
    pub fn inner(&self) -> u32 {
        self.0
    }
}

impl<const DEFAULT: u32> Default for Limit<DEFAULT> {
    fn default() -> Self {
        Self(DEFAULT)
    }
}

impl<'de, const DEFAULT: u32> Deserialize<'de> for Limit<DEFAULT> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let limit = u32::deserialize(deserializer)?;

        Ok(Limit(limit))
    }
}

pub(crate) fn first_page() -> u32 {
    1
}
