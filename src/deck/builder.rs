//! Slide construction helpers for the two layouts the deck uses.

use crate::common::RGBColor;
use crate::common::unit::inches_to_emu;
use crate::pptx::{Alignment, Presentation};

// Color scheme
pub const DARK_BLUE: RGBColor = RGBColor::new(31, 78, 121);
pub const LIGHT_BLUE: RGBColor = RGBColor::new(68, 114, 196);
pub const GREEN: RGBColor = RGBColor::new(76, 175, 80);
pub const RED: RGBColor = RGBColor::new(244, 67, 54);
pub const GRAY: RGBColor = RGBColor::new(89, 89, 89);
pub const WHITE: RGBColor = RGBColor::new(255, 255, 255);

/// Builds the deck one slide at a time on a 10 x 7.5 inch canvas.
///
/// Two slide styles are supported: title slides (dark background,
/// centered text) and content slides (white background, header bar,
/// bulleted body).
pub struct DeckBuilder {
    presentation: Presentation,
}

impl Default for DeckBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DeckBuilder {
    pub fn new() -> Self {
        let mut presentation = Presentation::new();
        presentation
            .set_slide_width(inches_to_emu(10.0))
            .set_slide_height(inches_to_emu(7.5));
        DeckBuilder { presentation }
    }

    /// Append a title slide.
    ///
    /// An empty `subtitle` omits the subtitle text box entirely rather
    /// than adding an empty shape.
    pub fn add_title_slide(&mut self, title: &str, subtitle: &str) -> &mut Self {
        let slide = self.presentation.add_slide();
        slide.set_background(DARK_BLUE);

        let frame = slide.add_text_box(0.5, 2.5, 9.0, 1.5);
        frame.set_word_wrap(true);
        frame
            .add_paragraph(title)
            .font_size(54.0)
            .bold(true)
            .color(WHITE)
            .alignment(Alignment::Center);

        if !subtitle.is_empty() {
            let frame = slide.add_text_box(0.5, 4.2, 9.0, 2.0);
            frame.set_word_wrap(true);
            frame
                .add_paragraph(subtitle)
                .font_size(28.0)
                .color(LIGHT_BLUE)
                .alignment(Alignment::Center);
        }
        self
    }

    /// Append a content slide with a header bar and one paragraph per
    /// bullet. Empty bullet strings become empty paragraphs, keeping
    /// their vertical space.
    pub fn add_content_slide(&mut self, title: &str, bullets: &[&str]) -> &mut Self {
        let slide = self.presentation.add_slide();
        slide.set_background(WHITE);

        slide
            .add_rectangle(0.0, 0.0, 10.0, 1.0)
            .fill(DARK_BLUE)
            .line(DARK_BLUE);

        slide
            .add_text_box(0.5, 0.2, 9.0, 0.8)
            .add_paragraph(title)
            .font_size(40.0)
            .bold(true)
            .color(WHITE);

        let frame = slide.add_text_box(0.7, 1.3, 8.6, 5.7);
        frame.set_word_wrap(true);
        for bullet in bullets {
            frame
                .add_paragraph(*bullet)
                .font_size(18.0)
                .color(GRAY)
                .space_before(6.0)
                .space_after(6.0);
        }
        self
    }

    /// The presentation built so far.
    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    /// Consume the builder and return the finished presentation.
    pub fn into_presentation(self) -> Presentation {
        self.presentation
    }
}
