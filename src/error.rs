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

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("Translation file not found")]
    TranslationNotFound,
    #[error("Translation file is not a JSON object of strings")]
    TranslationInvalid,
    #[error("Terminal setup failed")]
    TerminalFailed,
}

impl AppError {
    pub const TRANSLATION_NOT_FOUND_EXIT_CODE: i32 = 20;
    pub const TRANSLATION_INVALID_EXIT_CODE: i32 = 21;
    pub const TERMINAL_FAILED_EXIT_CODE: i32 = 22;

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::TranslationNotFound => Self::TRANSLATION_NOT_FOUND_EXIT_CODE,
            Self::TranslationInvalid => Self::TRANSLATION_INVALID_EXIT_CODE,
            Self::TerminalFailed => Self::TERMINAL_FAILED_EXIT_CODE,
        }
    }

    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::TranslationNotFound => {
                "Translation file not found. Check the path passed to --translations."
            }
            Self::TranslationInvalid => {
                "Translation file must be a JSON object mapping source texts to translations."
            }
            Self::TerminalFailed => "Failed to set up or drive the terminal.",
        }
    }
}
