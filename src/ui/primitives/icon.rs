use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
    Added,
    Removed,
    Modified,
    File,
    Watcher,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Added) => theme::icons::ADDED,
            (true, Icon::Removed) => theme::icons::REMOVED,
            (true, Icon::Modified) => theme::icons::MODIFIED,
            (true, Icon::File) => theme::icons::FILE,
            (true, Icon::Watcher) => theme::icons::WATCHER,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Added) => theme::icons_ascii::ADDED,
            (false, Icon::Removed) => theme::icons_ascii::REMOVED,
            (false, Icon::Modified) => theme::icons_ascii::MODIFIED,
            (false, Icon::File) => theme::icons_ascii::FILE,
            (false, Icon::Watcher) => theme::icons_ascii::WATCHER,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success | Icon::Added => theme::colors::SUCCESS,
            Icon::Error | Icon::Removed => theme::colors::ERROR,
            Icon::Warning | Icon::Modified => theme::colors::WARNING,
            Icon::Arrow => theme::colors::DIM,
            Icon::File | Icon::Watcher => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
