/// Named max-width tiers shared by every responsive rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 6] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
        Breakpoint::Xxl,
    ];

    pub const fn max_width_px(self) -> u32 {
        match self {
            Breakpoint::Xs => 480,
            Breakpoint::Sm => 576,
            Breakpoint::Md => 768,
            Breakpoint::Lg => 992,
            Breakpoint::Xl => 1200,
            Breakpoint::Xxl => 1400,
        }
    }
}

/// `@media` prelude matching viewports no wider than `breakpoint`.
pub fn media(breakpoint: Breakpoint) -> String {
    format!("@media (max-width: {}px)", breakpoint.max_width_px())
}
