use crate::export::{Folder, Item, KIND_LOGIN, KIND_SECURE_NOTE};
use crate::store::PassStore;

use std::collections::HashMap;

/// The import pipeline. Owns the folder-id lookup and the per-run collision
/// counters; items are handed to the store strictly in export order.
pub struct Importer<'a> {
    store: &'a PassStore,
    folders: HashMap<&'a str, String>,
    entry_count: HashMap<String, u32>,
}

impl<'a> Importer<'a> {
    pub fn new(store: &'a PassStore, folders: &'a [Folder]) -> Self {
        // later folders with a duplicate id overwrite earlier ones
        let folders = folders
            .iter()
            .map(|folder| (folder.id.as_str(), sanitize_name(&folder.name)))
            .collect();
        Self {
            store,
            folders,
            entry_count: HashMap::new(),
        }
    }

    /// Inserts one store entry per Login/SecureNote item and prints one
    /// status line per attempt. Insert failures never stop the run.
    pub fn run(&mut self, items: &[Item]) {
        for item in items {
            let Some((path, content)) = self.render(item) else {
                continue;
            };
            let path = self.dedupe(path);
            match self.store.insert(&path, &content) {
                Ok(()) => println!("Inserted: {}", path),
                Err(err) => println!("Error inserting {}: {:#}", path, err),
            }
        }
    }

    /// Classifies an item and renders its destination path and content.
    /// Returns `None` for item types that produce no entry.
    fn render(&self, item: &Item) -> Option<(String, String)> {
        let name = sanitize_name(&item.name);
        match item.kind {
            KIND_LOGIN => {
                let Some(login) = &item.login else {
                    // the export format always carries a login payload on
                    // type-1 items; a missing one is not worth aborting over
                    eprintln!("Skipping login item without login data: {}", item.name);
                    return None;
                };
                let domain = match login.uris().first() {
                    Some(uri) => domain_from_uri(uri.uri()),
                    None => "unknown_domain",
                };
                let path = match self.folder_of(item) {
                    Some(folder) => format!("{}/{}/{}", folder, domain, name),
                    None => format!("{}/{}", domain, name),
                };

                let mut content = format!(
                    "{}\nUsername: {}\n",
                    login.password.as_deref().unwrap_or(""),
                    login.username.as_deref().unwrap_or("")
                );
                for uri in login.uris() {
                    content.push_str(&format!("URL: {}\n", uri.uri()));
                }
                let totp = login.totp.as_deref().unwrap_or("");
                if !totp.is_empty() {
                    content.push_str(&format!("TOTP: {}\n", totp));
                }
                if !item.notes().is_empty() {
                    content.push_str(&format!("\nNotes:\n{}\n", item.notes()));
                }
                Some((path, content))
            }
            KIND_SECURE_NOTE => {
                let path = match self.folder_of(item) {
                    Some(folder) => format!("{}/notes/{}", folder, name),
                    None => format!("notes/{}", name),
                };
                Some((path, item.notes().to_owned()))
            }
            _ => None,
        }
    }

    /// Resolves the folder segment of an item's path. `None` means no folder
    /// segment at all; an id that misses the index keeps the segment, empty.
    fn folder_of(&self, item: &Item) -> Option<&str> {
        match item.folder_id.as_deref() {
            None | Some("") | Some("null") => None,
            Some(id) => Some(self.folders.get(id).map_or("", String::as_str)),
        }
    }

    /// Disambiguates repeated paths within a run: the first occurrence keeps
    /// the base path, later ones get `_2`, `_3`, … in encounter order.
    /// Counters are keyed by the pre-suffix path.
    fn dedupe(&mut self, path: String) -> String {
        let count = self.entry_count.entry(path.clone()).or_insert(0);
        *count += 1;
        if *count == 1 {
            path
        } else {
            format!("{}_{}", path, count)
        }
    }
}

/// Maps every character outside `[A-Za-z0-9_-]` to an underscore, so any
/// free-form name is usable as a single path segment.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' => c,
            _ => '_',
        })
        .collect()
}

/// Extracts the host part of a URI: everything between the first `"://"` and
/// the next `/`. Schemeless strings map to the literal `"unknown_domain"`.
/// No lowercasing, no `www.` stripping, no validation.
pub fn domain_from_uri(uri: &str) -> &str {
    match uri.split_once("://") {
        Some((_, rest)) => match rest.split_once('/') {
            Some((domain, _)) => domain,
            None => rest,
        },
        None => "unknown_domain",
    }
}
