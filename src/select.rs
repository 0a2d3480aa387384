//! Dropdown-style selection controls over the fixed setup domains.

use std::fmt;

/// Player counts offered by the setup selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCount {
    /// Two players.
    Two,
    /// Three players.
    Three,
    /// Four players.
    Four,
    /// Five players.
    Five,
    /// Six players.
    Six,
}

impl PlayerCount {
    /// Every selectable player count, in display order.
    pub const ALL: [PlayerCount; 5] = [
        PlayerCount::Two,
        PlayerCount::Three,
        PlayerCount::Four,
        PlayerCount::Five,
        PlayerCount::Six,
    ];

    /// The numeric player count.
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            PlayerCount::Two => 2,
            PlayerCount::Three => 3,
            PlayerCount::Four => 4,
            PlayerCount::Five => 5,
            PlayerCount::Six => 6,
        }
    }

    /// Look up the variant for a numeric value, if it is in the domain.
    #[must_use]
    pub fn from_value(value: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|count| count.value() == value)
    }
}

impl fmt::Display for PlayerCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Players", self.value())
    }
}

/// Starting HP values offered by the setup selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartingHp {
    /// 20 starting HP.
    Twenty,
    /// 40 starting HP.
    Forty,
    /// 60 starting HP.
    Sixty,
    /// 80 starting HP.
    Eighty,
}

impl StartingHp {
    /// Every selectable starting HP, in display order.
    pub const ALL: [StartingHp; 4] = [
        StartingHp::Twenty,
        StartingHp::Forty,
        StartingHp::Sixty,
        StartingHp::Eighty,
    ];

    /// The numeric starting HP.
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            StartingHp::Twenty => 20,
            StartingHp::Forty => 40,
            StartingHp::Sixty => 60,
            StartingHp::Eighty => 80,
        }
    }

    /// Look up the variant for a numeric value, if it is in the domain.
    #[must_use]
    pub fn from_value(value: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|hp| hp.value() == value)
    }
}

impl fmt::Display for StartingHp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} HP", self.value())
    }
}

/// State of one dropdown-style selection control.
///
/// Each selector is independent: opening or choosing in one never affects
/// any other selector on the screen. The committed value is always a member
/// of the option domain.
#[derive(Debug, Clone, Copy)]
pub struct Selector<T: Copy + PartialEq + 'static> {
    options: &'static [T],
    committed: T,
    open: bool,
    highlight: usize,
}

impl<T: Copy + PartialEq> Selector<T> {
    /// Create a closed selector committed to `committed`.
    #[must_use]
    pub fn new(options: &'static [T], committed: T) -> Self {
        let highlight = options
            .iter()
            .position(|&option| option == committed)
            .unwrap_or(0);
        Selector {
            options,
            committed,
            open: false,
            highlight,
        }
    }

    /// The currently committed value.
    #[must_use]
    pub fn committed(&self) -> T {
        self.committed
    }

    /// Whether the option list is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The option domain.
    #[must_use]
    pub fn options(&self) -> &'static [T] {
        self.options
    }

    /// Index of the highlighted option while open.
    #[must_use]
    pub fn highlight(&self) -> usize {
        self.highlight
    }

    /// Open the option list with the committed value highlighted.
    pub fn open(&mut self) {
        self.open = true;
        self.highlight = self
            .options
            .iter()
            .position(|&option| option == self.committed)
            .unwrap_or(0);
    }

    /// Close the option list without changing the committed value.
    pub fn cancel(&mut self) {
        self.open = false;
    }

    /// Move the highlight to the next option, wrapping at the end.
    pub fn next(&mut self) {
        if self.open && !self.options.is_empty() {
            self.highlight = (self.highlight + 1) % self.options.len();
        }
    }

    /// Move the highlight to the previous option, wrapping at the start.
    pub fn prev(&mut self) {
        if self.open && !self.options.is_empty() {
            self.highlight = self
                .highlight
                .checked_sub(1)
                .unwrap_or(self.options.len() - 1);
        }
    }

    /// Commit the highlighted option and close the list.
    pub fn choose(&mut self) -> T {
        if let Some(&option) = self.options.get(self.highlight) {
            self.committed = option;
        }
        self.open = false;
        self.committed
    }
}
