use serde::Deserialize;

/// In-memory model of a Bitwarden JSON export. Unknown fields are ignored;
/// fields the export writes as `null` are `Option`s and read as empty.
#[derive(Deserialize)]
pub struct Export {
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub folders: Vec<Folder>,
}

#[derive(Deserialize)]
pub struct Folder {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Item type discriminants as used by the export format. Other values exist
/// (card, identity) but produce no output here.
pub const KIND_LOGIN: i64 = 1;
pub const KIND_SECURE_NOTE: i64 = 2;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default)]
    pub folder_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub login: Option<Login>,
}

impl Item {
    pub fn notes(&self) -> &str {
        self.notes.as_deref().unwrap_or("")
    }
}

#[derive(Deserialize)]
pub struct Login {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub totp: Option<String>,
    #[serde(default)]
    pub uris: Option<Vec<Uri>>,
}

impl Login {
    pub fn uris(&self) -> &[Uri] {
        self.uris.as_deref().unwrap_or(&[])
    }
}

#[derive(Deserialize)]
pub struct Uri {
    #[serde(default)]
    pub uri: Option<String>,
}

impl Uri {
    pub fn uri(&self) -> &str {
        self.uri.as_deref().unwrap_or("")
    }
}
