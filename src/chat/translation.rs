// chat-panel — A chat panel component with a terminal host
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Injected text translation. Unknown texts should come back unchanged.
pub trait Translator {
    fn translate(&self, text: &str) -> String;
}

/// Plain lookup table, loadable from a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationMap {
    entries: HashMap<String, String>,
}

impl TranslationMap {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, source: impl Into<String>, translated: impl Into<String>) -> Self {
        self.insert(source, translated);
        self
    }

    pub fn insert(&mut self, source: impl Into<String>, translated: impl Into<String>) {
        self.entries.insert(source.into(), translated.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn from_json(json: &str) -> Result<Self, AppError> {
        serde_json::from_str(json).map_err(|e| {
            tracing::warn!("invalid translation table: {e}");
            AppError::TranslationInvalid
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            tracing::warn!("failed to read translations from {}: {e}", path.display());
            AppError::TranslationNotFound
        })?;
        let map = Self::from_json(&json)?;
        tracing::info!(entries = map.len(), path = %path.display(), "translations loaded");
        Ok(map)
    }
}

impl Translator for TranslationMap {
    fn translate(&self, text: &str) -> String {
        self.entries.get(text).cloned().unwrap_or_else(|| text.to_owned())
    }
}
