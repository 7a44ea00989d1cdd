//! Type definitions and enums for the application state and navigation.

/// Enumeration of available application screens.
///
/// This enumeration holds information about the current screen of the application. This is used
/// to determine which screen to render and what actions to take based on user input.
#[derive(Debug, PartialEq)]
pub(crate) enum Screen {
    /// Main menu screen.
    MainMenu(MainMenuItem),
    /// Options configuration screen.
    OptionsMenu(OptionsMenuItem),
    /// Maze screen where the generated maze is displayed and its solution animated.
    InGame,
    /// Size selection screen.
    ///
    /// This variant represents the list of maze size presets the user can pick from.
    SizeMenu,
}

/// Main menu navigation options.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum MainMenuItem {
    /// "Start" menu option, which generates a maze and starts solving it.
    StartGame,
    /// "Options" menu option.
    Options,
    /// "Quit" menu option.
    Quit,
}

/// Options menu navigation choices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum OptionsMenuItem {
    /// "Size" selection option.
    Size,
    /// "Return" navigation option.
    Back,
}

/// Generic menu type configuration.
///
/// This enumeration holds the specifics of each boxed menu in the interface, which share their
/// layout and only differ in title and number of entries.
pub(crate) enum MenuType {
    /// Main menu with the given number of entries.
    MainMenu(u8),
    /// Options menu with the given number of entries.
    OptionsMenu(u8),
}

impl MenuType {
    /// Returns the title shown on the menu's border.
    pub(crate) const fn repr(&self) -> &str {
        match self {
            Self::MainMenu(_) => "Main Menu",
            Self::OptionsMenu(_) => "Options Menu",
        }
    }

    /// Returns the number of entries in the menu, used to size its container.
    pub(crate) const fn value(&self) -> u8 {
        match self {
            Self::MainMenu(value) | Self::OptionsMenu(value) => *value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_variants() {
        let main_menu = Screen::MainMenu(MainMenuItem::StartGame);
        let options_menu = Screen::OptionsMenu(OptionsMenuItem::Back);

        assert_eq!(main_menu, Screen::MainMenu(MainMenuItem::StartGame));
        assert_eq!(options_menu, Screen::OptionsMenu(OptionsMenuItem::Back));
        assert_ne!(main_menu, Screen::InGame);
        assert_ne!(options_menu, Screen::SizeMenu);
    }

    #[test]
    fn test_menu_type_repr() {
        assert_eq!(MenuType::MainMenu(3).repr(), "Main Menu");
        assert_eq!(MenuType::OptionsMenu(2).repr(), "Options Menu");
    }

    #[test]
    fn test_menu_type_value() {
        assert_eq!(MenuType::MainMenu(3).value(), 3);
        assert_eq!(MenuType::OptionsMenu(2).value(), 2);
        assert_eq!(MenuType::OptionsMenu(0).value(), 0);
    }

    #[test]
    fn test_debug_implementations() {
        assert_eq!(format!("{:?}", Screen::SizeMenu), "SizeMenu");
        assert_eq!(format!("{:?}", MainMenuItem::StartGame), "StartGame");
        assert_eq!(format!("{:?}", OptionsMenuItem::Size), "Size");
    }
}
