//! Item properties parser (`tf properties`)

use super::super::TfsError;
use super::super::constants::{fields, special};
use super::{Parser, parse_changeset_number, split_field};
use crate::model::{Item, ItemId};

impl Parser {
    /// Parse `tf properties` output into the server-side item description
    ///
    /// Only the `Server information:` block is read; local workspace
    /// information (if any) is skipped.
    pub fn parse_properties(output: &str) -> Result<Item, TfsError> {
        let mut in_server_block = false;
        let mut server_path: Option<String> = None;
        let mut changeset_id: Option<u32> = None;

        for line in output.lines() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }

            if !line.starts_with(char::is_whitespace) {
                in_server_block = line.trim_start().starts_with("Server information");
                continue;
            }
            if !in_server_block {
                continue;
            }

            let Some((key, value)) = split_field(line) else {
                continue;
            };
            match key {
                fields::SERVER_PATH if value.starts_with(special::SERVER_ROOT) => {
                    server_path = Some(value.to_string());
                }
                fields::CHANGESET => changeset_id = Some(parse_changeset_number(value)?),
                _ => {}
            }
        }

        match (server_path, changeset_id) {
            (Some(path), Some(changeset_id)) => Ok(Item {
                item_id: ItemId::new(path.clone()),
                server_path: path,
                changeset_id,
            }),
            _ => Err(TfsError::ParseError(format!(
                "Missing server path or changeset in properties output: {}",
                output
            ))),
        }
    }
}
