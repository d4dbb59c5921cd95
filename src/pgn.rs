//! Game metadata tags and helpers for writing games in PGN.
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use chrono::Local;
use crate::Position;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The seven tag roster, less the result, which always comes from the game itself
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct Tags {
    pub event: String,
    pub site: String,
    pub date: String,
    pub round: String,
    pub white: String,
    pub black: String,
}

impl Tags {
    /// Creates tags for a game played here and now: the site is this machine's host name and
    /// the date is today's date. Every other tag is unknown (`?`).
    pub fn new() -> Self {
        let mut tags = Tags::default();

        if let Ok(hostname) = hostname::get() {
            if let Ok(hostname) = hostname.into_string() {
                tags.site = hostname;
            }
        }
        tags.date = Local::today().format("%Y.%m.%d").to_string();

        tags
    }

    /// Writes the tag pairs, one per line, ending with the `Result` tag and, for a game that
    /// did not start from the standard position, the `SetUp` and `FEN` tags
    pub fn to_tag_pairs(&self, result: &str, setup: Option<&Position>) -> String {
        let mut pairs = vec![
            ("Event", self.event.clone()),
            ("Site", self.site.clone()),
            ("Date", self.date.clone()),
            ("Round", self.round.clone()),
            ("White", self.white.clone()),
            ("Black", self.black.clone()),
            ("Result", result.to_owned()),
        ];
        if let Some(pos) = setup {
            pairs.push(("SetUp", "1".to_owned()));
            pairs.push(("FEN", pos.to_fen_str()));
        }

        pairs.iter()
            .map(|(name, value)| format!("[{} \"{}\"]\n", name, escape(value)))
            .collect()
    }
}

impl Default for Tags {
    fn default() -> Self {
        Tags {
            event: "?".to_owned(),
            site: "?".to_owned(),
            date: "????.??.??".to_owned(),
            round: "?".to_owned(),
            white: "?".to_owned(),
            black: "?".to_owned(),
        }
    }
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Joins the words of the move text with spaces, starting a new line before any line would
/// reach 80 bytes
pub fn wrap_move_text<S: AsRef<str>>(words: &[S]) -> String {
    let mut move_text = String::new();
    let mut width = 0;

    for word in words {
        let word: &str = word.as_ref();
        if width + word.len() < 80 && width > 0 {
            move_text += " ";
            width += 1;
        } else if width > 0 {
            move_text += "\n";
            width = 0;
        }
        move_text += word;
        width += word.len();
    }

    move_text
}
