use clab::{
    render::{cells_to_draw, layout, Glyphs, TextRenderer},
    Maze,
};

use crate::settings::{ColorScheme, Settings};

/// Same layout as [`TextRenderer`], every glyph colored by its cell kind.
#[derive(Debug, Clone, Default)]
pub struct StyledRenderer {
    glyphs: Glyphs,
    scheme: ColorScheme,
}

impl StyledRenderer {
    pub fn new(glyphs: Glyphs, scheme: ColorScheme) -> Self {
        Self { glyphs, scheme }
    }

    pub fn render(&self, maze: &Maze, with_solution: bool) -> String {
        layout(&cells_to_draw(maze, with_solution), |cell| {
            self.scheme.style(cell).apply(self.glyphs.glyph(cell))
        })
    }
}

#[derive(Debug, Clone)]
pub enum MazeRenderer {
    Plain(TextRenderer),
    Styled(StyledRenderer),
}

impl MazeRenderer {
    pub fn from_settings(settings: &Settings, force_color: bool) -> Self {
        let glyphs = settings.get_glyphs();
        if force_color || settings.get_color() {
            MazeRenderer::Styled(StyledRenderer::new(glyphs, settings.get_color_scheme()))
        } else {
            MazeRenderer::Plain(TextRenderer::new(glyphs))
        }
    }

    pub fn render(&self, maze: &Maze, with_solution: bool) -> String {
        match self {
            MazeRenderer::Plain(renderer) => renderer.render(maze, with_solution),
            MazeRenderer::Styled(renderer) => renderer.render(maze, with_solution),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_by_default() {
        let renderer = MazeRenderer::from_settings(&Settings::new(), false);
        assert!(matches!(renderer, MazeRenderer::Plain(_)));

        let renderer = MazeRenderer::from_settings(&Settings::new().set_color(true), false);
        assert!(matches!(renderer, MazeRenderer::Styled(_)));
    }

    #[test]
    fn styled_output_keeps_glyphs() {
        let mut maze = Maze::generate(7, Some(11)).unwrap();
        maze.solve();

        let styled = MazeRenderer::from_settings(&Settings::new(), true).render(&maze, true);
        let plain = MazeRenderer::from_settings(&Settings::new(), false).render(&maze, true);

        assert_eq!(styled.lines().count(), plain.lines().count());
        assert_eq!(styled.matches('o').count(), plain.matches('o').count());
    }
}
