//! Static routine catalog: the four daily steps and the tips list.

use crate::constants::{STEP_COUNT, TIP_COUNT};
use crate::error::HabitError;

/// Identity of a routine step. Discriminants are the stable step ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Step {
    /// Morning intention.
    Intention = 1,
    /// Distraction-free writing block.
    Writing = 2,
    /// Single, timed social-media window.
    SocialWindow = 3,
    /// Evening reflection.
    Reflection = 4,
}

impl Step {
    /// All steps in display order.
    pub const ALL: [Step; STEP_COUNT] = [
        Step::Intention,
        Step::Writing,
        Step::SocialWindow,
        Step::Reflection,
    ];

    /// Stable numeric id (1..=4).
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Zero-based position in the catalog.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    /// Catalog entry for this step.
    #[must_use]
    pub fn definition(self) -> &'static RoutineStep {
        &ROUTINE[self.index()]
    }
}

impl TryFrom<u8> for Step {
    type Error = HabitError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            1 => Ok(Step::Intention),
            2 => Ok(Step::Writing),
            3 => Ok(Step::SocialWindow),
            4 => Ok(Step::Reflection),
            other => Err(HabitError::UnknownStep(other)),
        }
    }
}

/// Styling tag attached to a step card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Amber,
    Blue,
    Purple,
    Green,
}

/// A fixed entry of the daily routine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutineStep {
    pub step: Step,
    /// When in the day, and for how long.
    pub time: &'static str,
    pub emoji: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub accent: Accent,
}

/// The daily routine, in display order.
pub static ROUTINE: [RoutineStep; STEP_COUNT] = [
    RoutineStep {
        step: Step::Intention,
        time: "Ráno (5 min)",
        emoji: "🌅",
        title: "Záměr dne",
        description: "Před otevřením telefonu si polož otázku: 'O čem dnes napíšu?' \
                      Zapiš 1 větu – nápad na článek nebo pokračování rozepsaného.",
        accent: Accent::Amber,
    },
    RoutineStep {
        step: Step::Writing,
        time: "Dopoledne / odpoledne (30–45 min)",
        emoji: "✍️",
        title: "Blok psaní",
        description: "Zavři sociální sítě (telefon na letový režim nebo do jiné místnosti). \
                      Piš bez opravování – cíl je dostat myšlenky na papír. Klidně jen 300 slov.",
        accent: Accent::Blue,
    },
    RoutineStep {
        step: Step::SocialWindow,
        time: "Volný moment (max 15 min)",
        emoji: "📱",
        title: "Vědomé okno pro sítě",
        description: "Povol si jedno konkrétní časové okno pro sociální sítě – ne scrollování \
                      kdykoli. Nastav si časovač. Až zavoní, zavři.",
        accent: Accent::Purple,
    },
    RoutineStep {
        step: Step::Reflection,
        time: "Večer (5 min)",
        emoji: "✅",
        title: "Reflexe",
        description: "Napsal/a jsi dnes? Jak ses cítil/a bez scrollování? Zapiš 1–2 věty. \
                      Tato drobná reflexe buduje sebevědomí autora.",
        accent: Accent::Green,
    },
];

/// Static advice shown in the collapsible tips panel.
pub static TIPS: [&str; TIP_COUNT] = [
    "Odinstaluj appky sociálních sítí z telefonu, nech je jen v prohlížeči.",
    "Nastav v telefonu 'Screen Time' limit na sítě (iOS) nebo 'Digital Wellbeing' (Android).",
    "Piš v aplikaci bez notifikací – Notion, Bear, nebo prostý Poznámkový blok.",
    "Každý dokončený článek = malá odměna (káva, procházka, epizoda seriálu).",
];
