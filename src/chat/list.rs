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

use super::layout::{LayoutMetrics, wrap_text};
use super::message::{Message, MessageId, Side};
use unicode_width::UnicodeWidthStr;

/// Placement of one message inside the scrollable content, in layout points.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageLayout {
    /// Visual row; always equal to the list index once laid out.
    pub row: usize,
    pub y: f64,
    /// Full height including the message margins.
    pub height: f64,
    pub bubble_width: f64,
    pub bubble_height: f64,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone)]
struct Entry {
    message: Message,
    row: usize,
    layout: Option<MessageLayout>,
}

/// Ordered messages, top to bottom.
///
/// Adds and removes re-index the affected tail of the list and mark it for
/// re-layout; [`MessageList::layout`] then restacks everything from the first
/// dirty entry so that `y[i] == y[i - 1] + height[i - 1]` holds throughout.
#[derive(Debug, Clone, Default)]
pub struct MessageList {
    entries: Vec<Entry>,
    dirty_from: Option<usize>,
    content_height: f64,
}

impl MessageList {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert `message` and return its index.
    ///
    /// A regular message lands in the slot of its side's typing indicator,
    /// pushing the indicator down; anything else is appended. A second typing
    /// indicator for a side is dropped and the existing one's index returned.
    pub fn add(&mut self, message: Message) -> usize {
        let indicator = self.typing_index(message.side());
        let index = match (message.is_typing(), indicator) {
            (true, Some(existing)) => {
                tracing::debug!(side = ?message.side(), "duplicate typing indicator ignored");
                return existing;
            }
            (false, Some(slot)) => slot,
            _ => self.entries.len(),
        };
        self.entries.insert(index, Entry { message, row: index, layout: None });
        self.reindex_from(index);
        tracing::debug!(index, len = self.entries.len(), "message added");
        index
    }

    /// Remove by identity. Absent ids are ignored.
    pub fn remove(&mut self, id: MessageId) -> Option<Message> {
        let index = self.index_of(id)?;
        let entry = self.entries.remove(index);
        self.reindex_from(index);
        tracing::debug!(index, len = self.entries.len(), "message removed");
        Some(entry.message)
    }

    /// Snapshot of the current messages in order.
    #[must_use]
    pub fn all(&self) -> Vec<Message> {
        self.entries.iter().map(|e| e.message.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.entries.iter().map(|e| &e.message)
    }

    /// Messages paired with their current placement.
    pub fn placed(&self) -> impl Iterator<Item = (&Message, Option<&MessageLayout>)> {
        self.entries.iter().map(|e| (&e.message, e.layout.as_ref()))
    }

    #[must_use]
    pub fn get(&self, id: MessageId) -> Option<&Message> {
        self.entries.iter().find(|e| e.message.id() == id).map(|e| &e.message)
    }

    #[must_use]
    pub fn index_of(&self, id: MessageId) -> Option<usize> {
        self.entries.iter().position(|e| e.message.id() == id)
    }

    /// Visual row assigned to a message.
    #[must_use]
    pub fn row_of(&self, id: MessageId) -> Option<usize> {
        self.entries.iter().find(|e| e.message.id() == id).map(|e| e.row)
    }

    #[must_use]
    pub fn layout_of(&self, id: MessageId) -> Option<&MessageLayout> {
        self.entries.iter().find(|e| e.message.id() == id).and_then(|e| e.layout.as_ref())
    }

    /// Mutate a message in place; its size is recomputed on the next layout.
    pub fn update(&mut self, id: MessageId, f: impl FnOnce(&mut Message)) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let entry = &mut self.entries[index];
        f(&mut entry.message);
        entry.layout = None;
        self.mark_dirty(index);
        true
    }

    #[must_use]
    pub fn typing_indicator(&self, side: Side) -> Option<MessageId> {
        self.typing_index(side).map(|i| self.entries[i].message.id())
    }

    /// Drop every cached size, e.g. after a width or translation change.
    pub fn invalidate_layout(&mut self) {
        for entry in &mut self.entries {
            entry.layout = None;
        }
        self.mark_dirty(0);
    }

    #[must_use]
    pub fn needs_layout(&self) -> bool {
        self.dirty_from.is_some()
    }

    #[must_use]
    pub fn content_height(&self) -> f64 {
        self.content_height
    }

    /// Restack from the first dirty entry and return the content height.
    ///
    /// `display` yields the text as drawn (translated, with typing icon);
    /// `has_avatar` tells whether a side reserves an avatar slot.
    pub fn layout(
        &mut self,
        width: f64,
        metrics: &LayoutMetrics,
        has_avatar: impl Fn(Side) -> bool,
        display: impl Fn(&Message) -> String,
    ) -> f64 {
        let Some(start) = self.dirty_from.take() else {
            return self.content_height;
        };
        let mut y = start
            .checked_sub(1)
            .and_then(|prev| self.entries[prev].layout.as_ref())
            .map_or(0.0, |l| l.y + l.height);

        for (row, entry) in self.entries.iter_mut().enumerate().skip(start) {
            let mut placed = match entry.layout.take() {
                Some(existing) => existing,
                None => measure(&entry.message, width, metrics, &has_avatar, &display),
            };
            placed.row = row;
            placed.y = y;
            y += placed.height;
            entry.row = row;
            entry.layout = Some(placed);
        }
        self.content_height = y;
        tracing::trace!(start, content_height = y, "message list laid out");
        y
    }

    fn typing_index(&self, side: Side) -> Option<usize> {
        self.entries.iter().position(|e| e.message.is_typing() && e.message.side() == side)
    }

    fn reindex_from(&mut self, start: usize) {
        for (row, entry) in self.entries.iter_mut().enumerate().skip(start) {
            entry.row = row;
        }
        self.mark_dirty(start);
        if self.entries.is_empty() {
            self.content_height = 0.0;
        }
    }

    fn mark_dirty(&mut self, index: usize) {
        self.dirty_from = Some(self.dirty_from.map_or(index, |d| d.min(index)));
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn measure(
    message: &Message,
    width: f64,
    metrics: &LayoutMetrics,
    has_avatar: &impl Fn(Side) -> bool,
    display: &impl Fn(&Message) -> String,
) -> MessageLayout {
    let avatar = if has_avatar(message.side()) { metrics.avatar_slot() } else { 0.0 };
    let available = (width - avatar).max(0.0);
    let chrome = metrics.bubble_chrome();
    let max_cols = ((available - chrome) / metrics.char_width).floor().max(1.0) as usize;

    let lines = wrap_text(&display(message), max_cols);
    let widest = lines.iter().map(|l| l.width()).max().unwrap_or(0);
    let bubble_width = (widest as f64 * metrics.char_width + chrome).min(available.max(chrome));
    let bubble_height = lines.len() as f64 * metrics.line_height + metrics.text_padding * 2.0;

    MessageLayout {
        row: 0,
        y: 0.0,
        height: bubble_height + metrics.message_margin * 2.0,
        bubble_width,
        bubble_height,
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lay_out(list: &mut MessageList) -> f64 {
        list.layout(400.0, &LayoutMetrics::terminal(), |_| false, |m| m.text().to_owned())
    }

    fn assert_contiguous(list: &MessageList) {
        let mut expected_y = 0.0;
        for (i, (message, placed)) in list.placed().enumerate() {
            let placed = placed.expect("laid out");
            assert_eq!(placed.row, i);
            assert_eq!(list.row_of(message.id()), Some(i));
            assert_eq!(placed.y, expected_y);
            expected_y += placed.height;
        }
        assert_eq!(list.content_height(), expected_y);
    }

    fn texts(list: &MessageList) -> Vec<String> {
        list.iter()
            .map(|m| if m.is_typing() { "<typing>".to_owned() } else { m.text().to_owned() })
            .collect()
    }

    /// Regular messages of `side`, top to bottom.
    fn side_order(list: &MessageList, side: Side) -> Vec<MessageId> {
        list.iter().filter(|m| m.side() == side && !m.is_typing()).map(Message::id).collect()
    }

    /// Deterministic LCG so failing sequences can be replayed by seed.
    fn next(seed: &mut u64) -> u64 {
        *seed =
            seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
        *seed >> 33
    }

    #[test]
    fn appends_in_order() {
        let mut list = MessageList::new();
        assert_eq!(list.add(Message::left("a")), 0);
        assert_eq!(list.add(Message::right("b")), 1);
        assert_eq!(texts(&list), vec!["a", "b"]);
    }

    #[test]
    fn message_takes_typing_slot_of_its_side() {
        let mut list = MessageList::new();
        list.add(Message::left("first"));
        list.add(Message::typing(Side::Left));
        list.add(Message::right("other"));
        let idx = list.add(Message::left("reply"));
        assert_eq!(idx, 1);
        assert_eq!(texts(&list), vec!["first", "reply", "<typing>", "other"]);
    }

    #[test]
    fn other_side_typing_indicator_is_not_displaced() {
        let mut list = MessageList::new();
        list.add(Message::typing(Side::Right));
        assert_eq!(list.add(Message::left("x")), 1);
        assert_eq!(texts(&list), vec!["<typing>", "x"]);
    }

    #[test]
    fn duplicate_typing_indicator_is_ignored() {
        let mut list = MessageList::new();
        list.add(Message::typing(Side::Left));
        assert_eq!(list.add(Message::typing(Side::Left)), 0);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn remove_is_noop_for_absent_ids() {
        let mut list = MessageList::new();
        let stale = Message::left("gone");
        let id = stale.id();
        list.add(stale);
        assert!(list.remove(id).is_some());
        assert!(list.remove(id).is_none());
        assert!(list.is_empty());
    }

    #[test]
    fn snapshot_is_detached_from_list() {
        let mut list = MessageList::new();
        list.add(Message::left("a"));
        let snapshot = list.all();
        list.add(Message::left("b"));
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn layout_stays_contiguous_through_mutations() {
        let mut list = MessageList::new();
        let a = Message::left("short");
        let a_id = a.id();
        list.add(a);
        list.add(Message::right(
            "a considerably longer message that needs wrapping in a narrow view",
        ));
        list.add(Message::typing(Side::Left));
        lay_out(&mut list);
        assert_contiguous(&list);

        list.add(Message::left("inserted into typing slot"));
        list.remove(a_id);
        lay_out(&mut list);
        assert_contiguous(&list);
        assert!(!list.needs_layout());
    }

    #[test]
    fn opposite_side_typing_toggle_keeps_side_order() {
        for side in [Side::Left, Side::Right] {
            let mut list = MessageList::new();
            list.add(Message::new("a", side));
            list.add(Message::typing(side));
            list.add(Message::new("b", side));
            let before = side_order(&list, side);

            let other = side.opposite();
            list.add(Message::typing(other));
            let id = list.typing_indicator(other).unwrap();
            list.remove(id);
            list.add(Message::typing(other));
            list.add(Message::new("c", side));

            let mut expected = before;
            expected.push(list.iter().find(|m| m.text() == "c").unwrap().id());
            assert_eq!(side_order(&list, side), expected);
            lay_out(&mut list);
            assert_contiguous(&list);
        }
    }

    #[test]
    fn random_mutations_keep_layout_contiguous_and_side_order() {
        for start in 1..=30_u64 {
            let mut seed = start;
            let mut list = MessageList::new();
            let mut expected: [Vec<MessageId>; 2] = [Vec::new(), Vec::new()];
            for step in 0..60 {
                let side = if next(&mut seed) % 2 == 0 { Side::Left } else { Side::Right };
                let slot = side.slot();
                match next(&mut seed) % 5 {
                    0 | 1 => {
                        let message = Message::new(format!("{side:?} {step}"), side);
                        expected[slot].push(message.id());
                        list.add(message);
                    }
                    2 | 3 => match list.typing_indicator(side) {
                        Some(id) => {
                            list.remove(id);
                        }
                        None => {
                            list.add(Message::typing(side));
                        }
                    },
                    _ if !expected[slot].is_empty() => {
                        let i = usize::try_from(next(&mut seed)).unwrap() % expected[slot].len();
                        let id = expected[slot].remove(i);
                        assert!(list.remove(id).is_some());
                    }
                    _ => {}
                }

                lay_out(&mut list);
                assert_contiguous(&list);
                for s in [Side::Left, Side::Right] {
                    let order = side_order(&list, s);
                    assert_eq!(order, expected[s.slot()], "seed {start} step {step}");
                    // an indicator always trails its side's messages
                    if let Some(id) = list.typing_indicator(s) {
                        let at = list.index_of(id).unwrap();
                        assert!(
                            list.iter().skip(at).all(|m| m.side() != s || m.is_typing()),
                            "seed {start} step {step}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn measure_wraps_and_caps_bubble_width() {
        let mut list = MessageList::new();
        let m = Message::left("word ".repeat(40));
        let id = m.id();
        list.add(m);
        list.layout(200.0, &LayoutMetrics::terminal(), |_| false, |m| m.text().to_owned());
        let placed = list.layout_of(id).unwrap();
        // 200 points wide minus 30 of chrome leaves 17 columns
        assert!(placed.lines.iter().all(|l| l.width() <= 17));
        assert!(placed.bubble_width <= 200.0);
        assert_eq!(placed.bubble_height, placed.lines.len() as f64 * 10.0 + 20.0);
        assert_eq!(placed.height, placed.bubble_height + 10.0);
    }

    #[test]
    fn avatar_slot_narrows_available_width() {
        let mut with = MessageList::new();
        let mut without = MessageList::new();
        let text = "x".repeat(25);
        let a = Message::left(text.clone());
        let (a_id, b) = (a.id(), Message::left(text));
        let b_id = b.id();
        with.add(a);
        without.add(b);
        let metrics = LayoutMetrics::terminal();
        with.layout(300.0, &metrics, |_| true, |m| m.text().to_owned());
        without.layout(300.0, &metrics, |_| false, |m| m.text().to_owned());
        let lines = |list: &MessageList, id| list.layout_of(id).unwrap().lines.len();
        assert!(lines(&with, a_id) > lines(&without, b_id));
    }

    #[test]
    fn update_marks_message_for_relayout() {
        let mut list = MessageList::new();
        let m = Message::left("hi");
        let id = m.id();
        list.add(m);
        lay_out(&mut list);
        assert!(list.update(id, |m| m.set_text("hello\nthere".to_owned())));
        assert!(list.needs_layout());
        lay_out(&mut list);
        assert_eq!(list.layout_of(id).unwrap().lines.len(), 2);
    }
}
