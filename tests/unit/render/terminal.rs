//! Tests for terminal drawing, key handling and the input-aware pacer

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
    use sortviz::animation::{CancellationToken, Pacer, Phase};
    use sortviz::io::settings::{SessionConfig, Settings};
    use sortviz::math::color::Color;
    use sortviz::model::Palette;
    use sortviz::render::FrameView;
    use sortviz::render::terminal::{TerminalPacer, TerminalRenderer, is_quit_key, to_terminal};
    use std::time::Duration;

    fn config(show_config: bool) -> SessionConfig {
        Settings {
            show_config,
            ..Settings::default()
        }
        .validate()
        .unwrap()
    }

    fn draw(phase: Phase, show_config: bool, cols: u16, rows: u16) -> String {
        let config = config(show_config);
        let palette = Palette::rainbow(3);
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer
            .draw(
                &FrameView {
                    values: &[3, 1, 2],
                    palette: &palette,
                    config: &config,
                    phase,
                    hold: Duration::ZERO,
                },
                cols,
                rows,
            )
            .unwrap();
        String::from_utf8(renderer.writer().clone()).unwrap()
    }

    // Tests every cell is drawn with half blocks
    // Verified by printing full blocks
    #[test]
    fn test_draw_half_blocks() {
        let output = draw(Phase::Sorting, false, 6, 3);

        assert_eq!(output.matches('▀').count(), 18);
        assert!(!output.contains("Width"));
        assert!(!output.contains("Shuffling"));
    }

    // Tests the overlay is limited to the available rows
    // Verified by printing every overlay line
    #[test]
    fn test_draw_overlay() {
        let output = draw(Phase::Sorting, true, 30, 2);

        assert!(output.contains("Width: 800"));
        assert!(output.contains("Height: 400"));
        assert!(!output.contains("Number of Bars"));
    }

    // Tests the shuffling label is drawn while shuffling
    // Verified by labelling the sort
    #[test]
    fn test_draw_shuffling_label() {
        let output = draw(Phase::Shuffling, false, 20, 4);

        assert!(output.contains(" Shuffling "));
    }

    // Tests the screen is only cleared when the size changes
    // Verified by clearing on every frame
    #[test]
    fn test_redraw_same_size() {
        let config = config(false);
        let palette = Palette::rainbow(2);
        let frame = FrameView {
            values: &[2, 1],
            palette: &palette,
            config: &config,
            phase: Phase::Sorting,
            hold: Duration::ZERO,
        };
        let clear = "\u{1b}[2J";
        let mut renderer = TerminalRenderer::new(Vec::new());

        renderer.draw(&frame, 4, 2).unwrap();
        let first = renderer.writer().len();
        renderer.draw(&frame, 4, 2).unwrap();
        let output = String::from_utf8(renderer.writer().clone()).unwrap();

        assert_eq!(output.matches(clear).count(), 1);
        assert!(output.len() > first);

        renderer.draw(&frame, 5, 2).unwrap();
        let output = String::from_utf8(renderer.writer().clone()).unwrap();
        assert_eq!(output.matches(clear).count(), 2);
    }

    // Tests the last frame is drawn again at a new size
    // Verified by forgetting the frame after drawing it
    #[test]
    fn test_redraw_last_frame() {
        let config = config(false);
        let palette = Palette::rainbow(2);
        let clear = "\u{1b}[2J";
        let mut renderer = TerminalRenderer::new(Vec::new());

        renderer.redraw_at(4, 2).unwrap();
        assert!(renderer.writer().is_empty());

        renderer
            .draw(
                &FrameView {
                    values: &[2, 1],
                    palette: &palette,
                    config: &config,
                    phase: Phase::Pausing,
                    hold: Duration::ZERO,
                },
                4,
                2,
            )
            .unwrap();
        let drawn = renderer.writer().len();
        renderer.redraw_at(6, 3).unwrap();
        let output = String::from_utf8(renderer.writer().clone()).unwrap();

        assert!(output.len() > drawn);
        assert_eq!(output.matches(clear).count(), 2);
        assert_eq!(output.matches('▀').count(), 4 * 2 + 6 * 3);
    }

    // Tests quit keys
    // Verified by accepting plain c as quit
    #[test]
    fn test_is_quit_key() {
        assert!(is_quit_key(&KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(is_quit_key(&KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(is_quit_key(&KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!is_quit_key(&KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::NONE
        )));
        assert!(!is_quit_key(&KeyEvent::new_with_kind(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Release
        )));
    }

    // Tests palette colours become 24-bit terminal colours
    // Verified by swapping channels
    #[test]
    fn test_to_terminal() {
        assert_eq!(
            to_terminal(Color::new(1, 2, 3)),
            crossterm::style::Color::Rgb { r: 1, g: 2, b: 3 }
        );
    }

    // Tests a cancelled token stops the pacer before it touches the terminal
    // Verified by polling input before checking the token
    #[test]
    fn test_terminal_pacer_cancelled() {
        let token = CancellationToken::new();
        token.cancel();
        let mut pacer = TerminalPacer::new(token);

        let result = pacer.wait(Duration::from_secs(5));

        assert!(result.unwrap_err().is_interrupted());
    }
}
