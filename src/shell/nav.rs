//! Navigation surface: which actions exist and which are available yet.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavAction {
    pub label: &'static str,
    pub icon: &'static str,
    pub enabled: bool,
}

/// Sidebar "Events" actions. None of them is available yet.
pub const EVENT_ACTIONS: &[NavAction] = &[
    NavAction { label: "Stream", icon: "form-input", enabled: false },
    NavAction { label: "Filter", icon: "filter", enabled: false },
    NavAction { label: "Analytics", icon: "bar-chart", enabled: false },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub icon: &'static str,
    pub shortcut: Option<&'static str>,
    pub enabled: bool,
}

impl MenuItem {
    const fn inert(label: &'static str, icon: &'static str, shortcut: Option<&'static str>) -> Self {
        Self { label, icon, shortcut, enabled: false }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Label(&'static str),
    Separator,
    Group(&'static [MenuEntry]),
    Item(MenuItem),
    Submenu {
        label: &'static str,
        icon: &'static str,
        entries: &'static [MenuEntry],
    },
}

/// The account dropdown behind the viewer's avatar.
pub const ACCOUNT_MENU: &[MenuEntry] = &[
    MenuEntry::Label("My Account"),
    MenuEntry::Separator,
    MenuEntry::Group(&[
        MenuEntry::Item(MenuItem::inert("Profile", "user", Some("⇧⌘P"))),
        MenuEntry::Item(MenuItem::inert("Billing", "credit-card", Some("⌘B"))),
        MenuEntry::Item(MenuItem::inert("Settings", "settings", Some("⌘S"))),
        MenuEntry::Item(MenuItem::inert("Keyboard shortcuts", "keyboard", Some("⌘K"))),
    ]),
    MenuEntry::Separator,
    MenuEntry::Group(&[
        MenuEntry::Item(MenuItem::inert("Team", "users", None)),
        MenuEntry::Submenu {
            label: "Invite users",
            icon: "user-plus",
            entries: &[
                MenuEntry::Item(MenuItem::inert("Email", "mail", None)),
                MenuEntry::Item(MenuItem::inert("Message", "message-square", None)),
                MenuEntry::Separator,
                MenuEntry::Item(MenuItem::inert("More...", "plus-circle", None)),
            ],
        },
    ]),
    MenuEntry::Separator,
    MenuEntry::Item(MenuItem::inert("Log out", "log-out", Some("⇧⌘Q"))),
];
