use serde::{Deserialize, Serialize};

use super::author::{initial_of, Author};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    /// Only known for the signed-in user.
    #[serde(default)]
    pub email: Option<String>,
    pub join_date: String,
    pub followers_count: u32,
    pub following_count: u32,
    pub recipes_count: u32,
}

impl Profile {
    pub fn as_author(&self) -> Author {
        Author {
            id: self.id.clone(),
            name: self.name.clone(),
            avatar: self.avatar.clone(),
        }
    }

    pub fn initial(&self) -> String {
        initial_of(&self.name)
    }

    /// Website without the scheme and a leading `www.`.
    pub fn website_label(&self) -> Option<String> {
        self.website.as_deref().map(strip_scheme)
    }
}

fn strip_scheme(url: &str) -> String {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    rest.strip_prefix("www.").unwrap_or(rest).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_scheme() {
        assert_eq!(strip_scheme("https://johndoe-chef.com"), "johndoe-chef.com");
        assert_eq!(strip_scheme("http://www.example.org/a"), "example.org/a");
        assert_eq!(strip_scheme("example.org"), "example.org");
    }
}
