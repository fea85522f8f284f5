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

use super::buttons::{ButtonCallback, ButtonId, ButtonPosition, OptionButtons};
use super::input::{CursorMove, InputState};
use super::layout::LayoutMetrics;
use super::list::MessageList;
use super::listeners::{ChatEvent, ChatListener, ListenerRegistry};
use super::message::{Avatar, Message, MessageId, Side, SideStyle};
use super::translation::Translator;
use crate::animation::{
    Clock, FloatingButtonController, MaterialButtonState, PlaceholderFadeState, ScrollController,
    ScrollMetrics, SystemClock,
};
use ratatui::style::Color;
use std::rc::Rc;
use std::sync::Arc;

/// Untranslated input placeholder.
pub const PLACEHOLDER_TEXT: &str = "Enter your message";

/// The chat component: message list, input, title bar and option buttons.
///
/// All operations tolerate absent targets. Removing something that is not
/// there, or toggling a flag to its current value, does nothing.
pub struct ChatPanel {
    clock: Rc<dyn Clock>,
    metrics: LayoutMetrics,
    messages: MessageList,
    input: InputState,
    placeholder: PlaceholderFadeState,
    placeholder_text: String,
    scroll: ScrollController,
    floating: FloatingButtonController,
    title: Option<String>,
    title_text: Option<String>,
    close_visible: bool,
    buttons: OptionButtons,
    listeners: ListenerRegistry,
    translation: Option<Rc<dyn Translator>>,
    translation_enabled: bool,
    styles: [SideStyle; 2],
    avatars: [Option<Avatar>; 2],
    enabled: bool,
    input_focused: bool,
    viewport: (f64, f64),
    send_button: MaterialButtonState,
    close_button: MaterialButtonState,
    scroll_button: MaterialButtonState,
    send_color: (Color, Color),
}

impl ChatPanel {
    pub fn new() -> Self {
        Self::with_clock(Rc::new(SystemClock))
    }

    pub fn with_clock(clock: Rc<dyn Clock>) -> Self {
        Self {
            clock,
            metrics: LayoutMetrics::default(),
            messages: MessageList::new(),
            input: InputState::new(),
            placeholder: PlaceholderFadeState::new(),
            placeholder_text: PLACEHOLDER_TEXT.to_owned(),
            scroll: ScrollController::new(),
            floating: FloatingButtonController::new(),
            title: None,
            title_text: None,
            close_visible: false,
            buttons: OptionButtons::new(),
            listeners: ListenerRegistry::new(),
            translation: None,
            translation_enabled: true,
            styles: [SideStyle::default_for(Side::Left), SideStyle::default_for(Side::Right)],
            avatars: [None, None],
            enabled: true,
            input_focused: false,
            viewport: (0.0, 0.0),
            send_button: MaterialButtonState::new(),
            close_button: MaterialButtonState::new().with_background(Color::Rgb(140, 140, 140)),
            scroll_button: MaterialButtonState::new().with_background(Color::Rgb(100, 100, 100)),
            send_color: (SideStyle::default_for(Side::Right).background, Color::Rgb(255, 143, 0)),
        }
    }

    #[must_use]
    pub fn with_metrics(mut self, metrics: LayoutMetrics) -> Self {
        self.metrics = metrics;
        self.messages.invalidate_layout();
        self.relayout();
        self
    }

    #[must_use]
    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    // --- listeners ---

    /// Handle to the listener list; may be moved to other threads.
    #[must_use]
    pub fn listeners(&self) -> ListenerRegistry {
        self.listeners.clone()
    }

    pub fn add_chat_listener(&self, listener: Arc<dyn ChatListener>) -> bool {
        self.listeners.add(listener)
    }

    pub fn remove_chat_listener(&self, listener: &Arc<dyn ChatListener>) -> bool {
        self.listeners.remove(listener)
    }

    #[must_use]
    pub fn chat_listeners(&self) -> Vec<Arc<dyn ChatListener>> {
        self.listeners.snapshot()
    }

    fn fire(&mut self, event: &ChatEvent) {
        let listeners = self.listeners.snapshot();
        tracing::debug!(listeners = listeners.len(), ?event, "dispatching chat event");
        for listener in listeners {
            listener.chat_notification(self, event);
        }
    }

    // --- submit / close ---

    /// Send the composed text to the listeners.
    ///
    /// Blank input does nothing. Otherwise the input is cleared without the
    /// placeholder animation and focused; the list scrolls to the bottom only
    /// if a listener changed the number of messages. Returns whether the
    /// text was dispatched.
    pub fn submit_message(&mut self) -> bool {
        if !self.enabled || self.input.is_blank() {
            return false;
        }
        let text = self.input.text();
        let before = self.messages.len();
        self.fire(&ChatEvent::MessageSubmitted(text));
        if self.messages.len() != before {
            self.scroll_to_bottom();
        }
        self.input.clear();
        self.placeholder.clear_without_animation();
        self.input_focused = true;
        true
    }

    pub fn request_close(&mut self) {
        self.fire(&ChatEvent::CloseRequested);
    }

    // --- messages ---

    /// Insert `message` and scroll to the bottom. A second typing indicator
    /// for a side is not inserted; the id of the one already shown is
    /// returned instead.
    pub fn add_message(&mut self, message: Message) -> MessageId {
        let (id, side) = (message.id(), message.side());
        let before = self.messages.len();
        self.messages.add(message);
        if self.messages.len() == before {
            return self.messages.typing_indicator(side).unwrap_or(id);
        }
        self.relayout();
        self.scroll_to_bottom();
        id
    }

    pub fn remove_message(&mut self, id: MessageId) -> bool {
        if self.messages.remove(id).is_none() {
            return false;
        }
        self.relayout();
        true
    }

    #[must_use]
    pub fn messages(&self) -> Vec<Message> {
        self.messages.all()
    }

    #[must_use]
    pub fn message(&self, id: MessageId) -> Option<&Message> {
        self.messages.get(id)
    }

    #[must_use]
    pub fn message_list(&self) -> &MessageList {
        &self.messages
    }

    pub fn set_message_text(&mut self, id: MessageId, text: impl Into<String>) -> bool {
        let text = text.into();
        let changed = self.messages.update(id, |m| m.set_text(text));
        if changed {
            self.relayout();
        }
        changed
    }

    pub fn set_message_colors(
        &mut self,
        id: MessageId,
        background: Option<Color>,
        foreground: Option<Color>,
    ) -> bool {
        let changed = self.messages.update(id, |m| m.set_colors(background, foreground));
        if changed {
            self.relayout();
        }
        changed
    }

    /// Show or hide the "is typing" entry for `side`.
    pub fn set_typing_indicator(&mut self, side: Side, typing: bool) {
        match (typing, self.messages.typing_indicator(side)) {
            (true, None) => {
                tracing::debug!(?side, "typing indicator on");
                self.add_message(Message::typing(side));
            }
            (false, Some(id)) => {
                tracing::debug!(?side, "typing indicator off");
                self.remove_message(id);
            }
            _ => {}
        }
    }

    #[must_use]
    pub fn is_typing(&self, side: Side) -> bool {
        self.messages.typing_indicator(side).is_some()
    }

    // --- title bar ---

    /// `None` hides the title; the bar stays while the close button is shown.
    pub fn set_title(&mut self, title: Option<&str>) {
        self.title = title.map(str::to_owned);
        self.title_text = self.title.as_deref().map(|t| self.translate(t));
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Title as displayed, after translation.
    #[must_use]
    pub fn title_text(&self) -> Option<&str> {
        self.title_text.as_deref()
    }

    #[must_use]
    pub fn is_title_visible(&self) -> bool {
        self.title.is_some()
    }

    pub fn set_close_visible(&mut self, visible: bool) {
        self.close_visible = visible;
    }

    #[must_use]
    pub fn is_close_visible(&self) -> bool {
        self.close_visible
    }

    #[must_use]
    pub fn is_title_bar_visible(&self) -> bool {
        self.is_title_visible() || self.close_visible
    }

    // --- option buttons ---

    pub fn add_button(
        &mut self,
        icon: Option<&str>,
        text: Option<&str>,
        callback: Option<ButtonCallback>,
        position: ButtonPosition,
    ) -> ButtonId {
        self.buttons.add(icon.map(str::to_owned), text.map(str::to_owned), callback, position)
    }

    pub fn remove_button(&mut self, id: ButtonId) -> bool {
        self.buttons.remove(id)
    }

    pub fn remove_all_buttons(&mut self) {
        self.buttons.clear();
    }

    #[must_use]
    pub fn option_buttons(&self) -> &OptionButtons {
        &self.buttons
    }

    #[must_use]
    pub fn are_option_buttons_visible(&self) -> bool {
        self.buttons.is_visible()
    }

    // --- button presses (host hit-testing lands here) ---

    /// Send button activated at `(x, y)` of a `width` x `height` button.
    pub fn press_send(&mut self, x: f64, y: f64, width: f64, height: f64) -> bool {
        if !self.enabled {
            return false;
        }
        self.send_button.press(x, y, width, height, self.clock.now());
        self.submit_message()
    }

    pub fn press_close(&mut self, x: f64, y: f64, width: f64, height: f64) {
        if !self.close_visible {
            return;
        }
        self.close_button.press(x, y, width, height, self.clock.now());
        self.request_close();
    }

    pub fn press_scroll_down(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.scroll_button.press(x, y, width, height, self.clock.now());
        self.scroll_to_bottom();
    }

    /// Run an option button's callback. Unknown ids are ignored.
    pub fn press_option(&mut self, id: ButtonId, x: f64, y: f64, width: f64, height: f64) -> bool {
        let now = self.clock.now();
        let Some(state) = self.buttons.state_mut(id) else {
            return false;
        };
        state.press(x, y, width, height, now);
        if let Some(callback) = self.buttons.get(id).and_then(|b| b.callback()) {
            callback(self);
        }
        true
    }

    #[must_use]
    pub fn send_button(&self) -> &MaterialButtonState {
        &self.send_button
    }

    #[must_use]
    pub fn close_button(&self) -> &MaterialButtonState {
        &self.close_button
    }

    #[must_use]
    pub fn scroll_button(&self) -> &MaterialButtonState {
        &self.scroll_button
    }

    /// Left-to-right gradient of the send icon.
    pub fn set_send_button_color(&mut self, start: Color, end: Color) {
        self.send_color = (start, end);
    }

    #[must_use]
    pub fn send_button_color(&self) -> (Color, Color) {
        self.send_color
    }

    // --- translation ---

    /// Replace the translator and refresh every translated text. Setting the
    /// same translator again does nothing.
    pub fn set_translation(&mut self, translation: Option<Rc<dyn Translator>>) {
        let same = match (&self.translation, &translation) {
            (Some(a), Some(b)) => std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b)),
            (None, None) => true,
            _ => false,
        };
        if same {
            return;
        }
        self.translation = translation;
        self.update_translation();
    }

    pub fn set_translation_enabled(&mut self, enabled: bool) {
        if self.translation_enabled != enabled {
            self.translation_enabled = enabled;
            self.update_translation();
        }
    }

    #[must_use]
    pub fn is_translation_enabled(&self) -> bool {
        self.translation_enabled
    }

    #[must_use]
    pub fn translate(&self, text: &str) -> String {
        match self.active_translator() {
            Some(t) => t.translate(text),
            None => text.to_owned(),
        }
    }

    fn active_translator(&self) -> Option<&dyn Translator> {
        self.translation.as_deref().filter(|_| self.translation_enabled)
    }

    fn update_translation(&mut self) {
        self.placeholder_text = self.translate(PLACEHOLDER_TEXT);
        let title = self.title.clone();
        self.set_title(title.as_deref());
        self.messages.invalidate_layout();
        self.relayout();
    }

    /// Message text as drawn: translated, with the typing icon on the
    /// outer side of the bubble.
    #[must_use]
    pub fn display_text(&self, message: &Message) -> String {
        displayed_text(message, self.active_translator(), &self.styles)
    }

    // --- styling ---

    #[must_use]
    pub fn side_style(&self, side: Side) -> &SideStyle {
        &self.styles[side.slot()]
    }

    pub fn set_side_style(&mut self, side: Side, style: SideStyle) {
        self.styles[side.slot()] = style;
        self.messages.invalidate_layout();
        self.relayout();
    }

    #[must_use]
    pub fn avatar(&self, side: Side) -> Option<&Avatar> {
        self.avatars[side.slot()].as_ref()
    }

    /// `None` removes the avatar slot; bubbles widen into the freed space.
    pub fn set_avatar(&mut self, side: Side, avatar: Option<Avatar>) {
        self.avatars[side.slot()] = avatar;
        self.messages.invalidate_layout();
        self.relayout();
    }

    // --- enabled / focus ---

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn request_focus(&mut self) {
        self.input_focused = true;
    }

    pub fn blur(&mut self) {
        self.input_focused = false;
    }

    #[must_use]
    pub fn has_input_focus(&self) -> bool {
        self.input_focused
    }

    // --- input editing ---

    #[must_use]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    #[must_use]
    pub fn placeholder(&self) -> &PlaceholderFadeState {
        &self.placeholder
    }

    /// Placeholder as displayed, after translation.
    #[must_use]
    pub fn placeholder_text(&self) -> &str {
        &self.placeholder_text
    }

    pub fn insert_char(&mut self, c: char) {
        if self.enabled {
            self.input.insert_char(c);
            self.after_insert();
        }
    }

    pub fn insert_str(&mut self, s: &str) {
        if self.enabled && !s.is_empty() {
            self.input.insert_str(s);
            self.after_insert();
        }
    }

    pub fn insert_newline(&mut self) {
        if self.enabled {
            self.input.insert_newline();
            self.after_insert();
        }
    }

    pub fn delete_backward(&mut self) {
        if self.enabled && self.input.delete_before() {
            self.after_remove();
        }
    }

    pub fn delete_forward(&mut self) {
        if self.enabled && self.input.delete_after() {
            self.after_remove();
        }
    }

    pub fn move_cursor(&mut self, movement: CursorMove) {
        self.input.move_cursor(movement);
    }

    /// Replace the input text, animating the placeholder as typing would.
    pub fn set_input_text(&mut self, text: &str) {
        let had_text = !self.input.is_empty();
        self.input.set_text(text);
        if text.is_empty() {
            if had_text {
                self.after_remove();
            }
        } else {
            self.after_insert();
        }
    }

    fn after_insert(&mut self) {
        let now = self.clock.now();
        self.placeholder.on_insert(self.input.is_blank(), now);
    }

    fn after_remove(&mut self) {
        let now = self.clock.now();
        self.placeholder.on_remove(self.input.is_blank(), now);
    }

    // --- viewport & scrolling ---

    /// Viewport size in layout points.
    pub fn resize(&mut self, width: f64, height: f64) {
        let (width, height) = (width.max(0.0), height.max(0.0));
        let (old_w, old_h) = self.viewport;
        let width_changed = (old_w - width).abs() > f64::EPSILON;
        if !width_changed && (old_h - height).abs() <= f64::EPSILON {
            return;
        }
        self.viewport = (width, height);
        if width_changed {
            self.messages.invalidate_layout();
        }
        self.relayout();
    }

    #[must_use]
    pub fn viewport(&self) -> (f64, f64) {
        self.viewport
    }

    #[must_use]
    pub fn content_height(&self) -> f64 {
        self.messages.content_height()
    }

    #[must_use]
    pub fn max_scroll(&self) -> f64 {
        (self.content_height() - self.viewport.1).max(0.0)
    }

    #[must_use]
    pub fn scroll_offset(&self) -> f64 {
        self.scroll.offset()
    }

    #[must_use]
    pub fn scroll(&self) -> &ScrollController {
        &self.scroll
    }

    #[must_use]
    pub fn floating_button(&self) -> &FloatingButtonController {
        &self.floating
    }

    /// Animate to the last message. Without a usable viewport the offset
    /// jumps straight there.
    pub fn scroll_to_bottom(&mut self) {
        let target = self.max_scroll();
        if self.viewport.1 <= 0.0 {
            self.scroll.set_offset(target);
            return;
        }
        let now = self.clock.now();
        self.scroll.scroll_to(target, now);
    }

    /// User scroll by `delta` points (positive = towards the bottom).
    pub fn scroll_by(&mut self, delta: f64) {
        self.set_scroll_value(self.scroll.offset() + delta);
    }

    /// User scroll to an absolute offset, clamped to the content.
    pub fn set_scroll_value(&mut self, value: f64) {
        let value = value.clamp(0.0, self.max_scroll());
        self.scroll.set_offset(value);
        self.observe_scroll();
    }

    fn observe_scroll(&mut self) {
        let metrics = ScrollMetrics {
            value: self.scroll.offset(),
            extent: self.viewport.1,
            maximum: self.content_height(),
        };
        let now = self.clock.now();
        self.floating.observe(metrics, self.scroll.running(), now);
    }

    fn relayout(&mut self) {
        let avatars = &self.avatars;
        let styles = &self.styles;
        let translator = self.translation.as_deref().filter(|_| self.translation_enabled);
        self.messages.layout(
            self.viewport.0,
            &self.metrics,
            |side| avatars[side.slot()].is_some(),
            |m| displayed_text(m, translator, styles),
        );
        let max = self.max_scroll();
        if self.scroll.running() {
            // Content shrank under a running scroll: retarget from where it is
            if self.scroll.target() > max {
                let now = self.clock.now();
                self.scroll.scroll_to(max, now);
            }
        } else if self.scroll.offset() > max {
            self.scroll.set_offset(max);
        }
    }

    // --- frame ---

    /// Advance every animation to the clock's current time. Returns whether
    /// anything is still moving, i.e. whether the host should keep
    /// repainting.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        if self.scroll.tick(now).is_some() {
            self.observe_scroll();
        }
        self.floating.tick(now);
        self.placeholder.tick(now);
        self.send_button.tick(now);
        self.close_button.tick(now);
        self.scroll_button.tick(now);
        let buttons_active = self.buttons.tick(now);

        self.scroll.running()
            || self.floating.is_running()
            || self.placeholder.is_running()
            || self.send_button.is_running()
            || self.close_button.is_running()
            || self.scroll_button.is_running()
            || buttons_active
    }
}

impl Default for ChatPanel {
    fn default() -> Self {
        Self::new()
    }
}

fn displayed_text(
    message: &Message,
    translator: Option<&dyn Translator>,
    styles: &[SideStyle; 2],
) -> String {
    let text =
        translator.map_or_else(|| message.text().to_owned(), |t| t.translate(message.text()));
    if !message.is_typing() {
        return text;
    }
    let icon = styles[message.side().slot()].typing_icon();
    match (message.side(), text.is_empty()) {
        (_, true) => icon.to_owned(),
        (Side::Left, false) => format!("{text} {icon}"),
        (Side::Right, false) => format!("{icon} {text}"),
    }
}
