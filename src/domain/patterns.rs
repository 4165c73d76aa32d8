use super::Offset;

/// Sidebar grouping for catalog entries. Presentation only.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Category {
    Controls,
    StillLifes,
    Oscillators,
    Spaceships,
    Guns,
    Duplicators,
    Methuselahs,
    PuffersAndRakes,
    Misc,
}

impl Category {
    pub const fn label(self) -> &'static str {
        match self {
            Category::Controls => "Controls",
            Category::StillLifes => "Still Lifes",
            Category::Oscillators => "Oscillators",
            Category::Spaceships => "Spaceships",
            Category::Guns => "Guns",
            Category::Duplicators => "Duplicators",
            Category::Methuselahs => "Methuselahs",
            Category::PuffersAndRakes => "Puffers & Rakes",
            Category::Misc => "Misc / Fun",
        }
    }
}

/// One-shot catalog actions that do not place a fixed shape
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Action {
    /// Kill every cell and drop the active stamp
    Clear,
    /// Scatter random cells around the soup center
    RandomSoup,
}

impl Action {
    pub const fn name(self) -> &'static str {
        match self {
            Action::Clear => "Clear",
            Action::RandomSoup => "Random Soup",
        }
    }
}

/// Every stampable shape in the catalog
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PatternId {
    // Still lifes
    Block,
    Beehive,
    Loaf,
    Boat,
    Tub,
    // Oscillators
    Blinker,
    Toad,
    Beacon,
    Pulsar,
    PentaDecathlon,
    Clock,
    FigureEight,
    // Spaceships
    Glider,
    Lwss,
    Mwss,
    Hwss,
    // Guns
    GosperGliderGun,
    SimkinGliderGun,
    // Duplicators
    BlockerDuplicator,
    FourWayReplicator,
    SwitchEngine,
    BlockLayer1,
    GliderDuplicator,
    InfiniteGrowth1,
    InfiniteGrowth2,
    TenCellInfinite,
    LineGrower,
    MaxSpacefiller,
    // Methuselahs
    RPentomino,
    Diehard,
    Acorn,
    PiHeptomino,
    BHeptomino,
    Thunderbird,
    // Puffers & rakes
    PufferTrain,
    SpaceRake,
    // Misc
    PentadecathlonRing,
    Diamond,
    Cross,
    LobsterClaw,
    Bomb,
}

impl PatternId {
    /// All shapes, in catalog order
    pub const ALL: [PatternId; 41] = [
        PatternId::Block,
        PatternId::Beehive,
        PatternId::Loaf,
        PatternId::Boat,
        PatternId::Tub,
        PatternId::Blinker,
        PatternId::Toad,
        PatternId::Beacon,
        PatternId::Pulsar,
        PatternId::PentaDecathlon,
        PatternId::Clock,
        PatternId::FigureEight,
        PatternId::Glider,
        PatternId::Lwss,
        PatternId::Mwss,
        PatternId::Hwss,
        PatternId::GosperGliderGun,
        PatternId::SimkinGliderGun,
        PatternId::BlockerDuplicator,
        PatternId::FourWayReplicator,
        PatternId::SwitchEngine,
        PatternId::BlockLayer1,
        PatternId::GliderDuplicator,
        PatternId::InfiniteGrowth1,
        PatternId::InfiniteGrowth2,
        PatternId::TenCellInfinite,
        PatternId::LineGrower,
        PatternId::MaxSpacefiller,
        PatternId::RPentomino,
        PatternId::Diehard,
        PatternId::Acorn,
        PatternId::PiHeptomino,
        PatternId::BHeptomino,
        PatternId::Thunderbird,
        PatternId::PufferTrain,
        PatternId::SpaceRake,
        PatternId::PentadecathlonRing,
        PatternId::Diamond,
        PatternId::Cross,
        PatternId::LobsterClaw,
        PatternId::Bomb,
    ];

    /// Display name shown in the catalog
    pub const fn name(self) -> &'static str {
        match self {
            PatternId::Block => "Block",
            PatternId::Beehive => "Beehive",
            PatternId::Loaf => "Loaf",
            PatternId::Boat => "Boat",
            PatternId::Tub => "Tub",
            PatternId::Blinker => "Blinker",
            PatternId::Toad => "Toad",
            PatternId::Beacon => "Beacon",
            PatternId::Pulsar => "Pulsar",
            PatternId::PentaDecathlon => "Penta-decathlon",
            PatternId::Clock => "Clock",
            PatternId::FigureEight => "Figure Eight",
            PatternId::Glider => "Glider",
            PatternId::Lwss => "LWSS",
            PatternId::Mwss => "MWSS",
            PatternId::Hwss => "HWSS",
            PatternId::GosperGliderGun => "Gosper Glider Gun",
            PatternId::SimkinGliderGun => "Simkin Glider Gun",
            PatternId::BlockerDuplicator => "Blocker Duplicator",
            PatternId::FourWayReplicator => "4-Way Replicator",
            PatternId::SwitchEngine => "Switch Engine",
            PatternId::BlockLayer1 => "Block Layer 1",
            PatternId::GliderDuplicator => "Glider Duplicator",
            PatternId::InfiniteGrowth1 => "Infinite Growth 1",
            PatternId::InfiniteGrowth2 => "Infinite Growth 2",
            PatternId::TenCellInfinite => "10-Cell Infinite",
            PatternId::LineGrower => "Line Grower",
            PatternId::MaxSpacefiller => "Max Spacefiller",
            PatternId::RPentomino => "R-pentomino",
            PatternId::Diehard => "Diehard",
            PatternId::Acorn => "Acorn",
            PatternId::PiHeptomino => "Pi-heptomino",
            PatternId::BHeptomino => "B-heptomino",
            PatternId::Thunderbird => "Thunderbird",
            PatternId::PufferTrain => "Puffer Train",
            PatternId::SpaceRake => "Space Rake",
            PatternId::PentadecathlonRing => "Pentadecathlon Ring",
            PatternId::Diamond => "Diamond",
            PatternId::Cross => "Cross",
            PatternId::LobsterClaw => "Lobster Claw",
            PatternId::Bomb => "Bomb",
        }
    }

    pub const fn category(self) -> Category {
        use PatternId::*;
        match self {
            Block | Beehive | Loaf | Boat | Tub => Category::StillLifes,
            Blinker | Toad | Beacon | Pulsar | PentaDecathlon | Clock | FigureEight => {
                Category::Oscillators
            }
            Glider | Lwss | Mwss | Hwss => Category::Spaceships,
            GosperGliderGun | SimkinGliderGun => Category::Guns,
            BlockerDuplicator | FourWayReplicator | SwitchEngine | BlockLayer1
            | GliderDuplicator | InfiniteGrowth1 | InfiniteGrowth2 | TenCellInfinite
            | LineGrower | MaxSpacefiller => Category::Duplicators,
            RPentomino | Diehard | Acorn | PiHeptomino | BHeptomino | Thunderbird => {
                Category::Methuselahs
            }
            PufferTrain | SpaceRake => Category::PuffersAndRakes,
            PentadecathlonRing | Diamond | Cross | LobsterClaw | Bomb => Category::Misc,
        }
    }

    pub const fn description(self) -> &'static str {
        use PatternId::*;
        match self {
            Block | Beehive | Loaf | Boat | Tub => "Still life",
            Blinker | Toad | Beacon | Clock => "Oscillator (period 2)",
            Pulsar => "Oscillator (period 3)",
            PentaDecathlon => "Oscillator (period 15)",
            FigureEight => "Oscillator (period 8)",
            Glider => "Moves diagonally (period 4)",
            Lwss => "Lightweight spaceship",
            Mwss => "Middleweight spaceship",
            Hwss => "Heavyweight spaceship",
            GosperGliderGun => "Produces gliders (period 30)",
            SimkinGliderGun => "Produces gliders (period 120)",
            SwitchEngine => "Drifts diagonally leaving debris",
            BlockerDuplicator | FourWayReplicator | BlockLayer1 | GliderDuplicator
            | InfiniteGrowth1 | InfiniteGrowth2 | TenCellInfinite | LineGrower
            | MaxSpacefiller => "Grows without bound",
            RPentomino => "Methuselah - stabilizes at gen 1103",
            Diehard => "Methuselah - vanishes at gen 130",
            Acorn => "Methuselah - stabilizes at gen 5206",
            PiHeptomino | BHeptomino | Thunderbird => "Methuselah",
            PufferTrain => "Leaves a trail of debris",
            SpaceRake => "Emits gliders while moving",
            Bomb => "Dense 12x12 square that explodes",
            PentadecathlonRing | Diamond | Cross | LobsterClaw => "Curiosity",
        }
    }

    /// Relative cell offsets of the shape
    pub fn offsets(self) -> Vec<Offset> {
        use tables::*;
        let table: &[Offset] = match self {
            PatternId::Block => BLOCK,
            PatternId::Beehive => BEEHIVE,
            PatternId::Loaf => LOAF,
            PatternId::Boat => BOAT,
            PatternId::Tub => TUB,
            PatternId::Blinker => BLINKER,
            PatternId::Toad => TOAD,
            PatternId::Beacon => BEACON,
            PatternId::Pulsar => PULSAR,
            PatternId::PentaDecathlon => PENTA_DECATHLON,
            PatternId::Clock => CLOCK,
            PatternId::FigureEight => FIGURE_EIGHT,
            PatternId::Glider => GLIDER,
            PatternId::Lwss => LWSS,
            PatternId::Mwss => MWSS,
            PatternId::Hwss => HWSS,
            PatternId::GosperGliderGun => GOSPER_GUN,
            PatternId::SimkinGliderGun => SIMKIN_GUN,
            PatternId::BlockerDuplicator => BLOCKER_DUPLICATOR,
            PatternId::FourWayReplicator => FOUR_WAY_REPLICATOR,
            PatternId::SwitchEngine => SWITCH_ENGINE,
            PatternId::BlockLayer1 => BLOCK_LAYER_1,
            PatternId::GliderDuplicator => GLIDER_DUPLICATOR,
            PatternId::InfiniteGrowth1 | PatternId::TenCellInfinite => TEN_CELL_INFINITE,
            PatternId::InfiniteGrowth2 => ONE_ROW_INFINITE,
            PatternId::LineGrower => LINE_GROWER,
            PatternId::MaxSpacefiller => MAX_SPACEFILLER,
            PatternId::RPentomino => R_PENTOMINO,
            PatternId::Diehard => DIEHARD,
            PatternId::Acorn => ACORN,
            PatternId::PiHeptomino => PI_HEPTOMINO,
            PatternId::BHeptomino => B_HEPTOMINO,
            PatternId::Thunderbird => THUNDERBIRD,
            PatternId::PufferTrain => PUFFER_TRAIN,
            PatternId::SpaceRake => SPACE_RAKE,
            PatternId::PentadecathlonRing => PENTADECATHLON_RING,
            PatternId::Diamond => DIAMOND,
            PatternId::Cross => CROSS,
            PatternId::LobsterClaw => LOBSTER_CLAW,
            PatternId::Bomb => {
                return (0..BOMB_SIZE)
                    .flat_map(|r| (0..BOMB_SIZE).map(move |c| (r, c)))
                    .collect();
            }
        };
        table.to_vec()
    }
}

/// What a catalog click resolves to
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum CatalogEntry {
    Pattern(PatternId),
    Action(Action),
}

impl CatalogEntry {
    pub const fn name(self) -> &'static str {
        match self {
            CatalogEntry::Pattern(id) => id.name(),
            CatalogEntry::Action(action) => action.name(),
        }
    }

    /// Resolve a display name; `None` for names not in the catalog
    pub fn from_name(name: &str) -> Option<Self> {
        [Action::Clear, Action::RandomSoup]
            .into_iter()
            .map(CatalogEntry::Action)
            .chain(PatternId::ALL.into_iter().map(CatalogEntry::Pattern))
            .find(|entry| entry.name() == name)
    }
}

impl From<PatternId> for CatalogEntry {
    fn from(id: PatternId) -> Self {
        CatalogEntry::Pattern(id)
    }
}

impl From<Action> for CatalogEntry {
    fn from(action: Action) -> Self {
        CatalogEntry::Action(action)
    }
}

/// Represents a shape that can be stamped onto the grid
#[derive(Clone, Debug, PartialEq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub category: Option<Category>,
    /// Relative (dr, dc) offsets of alive cells
    pub offsets: Vec<Offset>,
    /// Preview bounding box height in cells
    pub rows: i32,
    /// Preview bounding box width in cells
    pub cols: i32,
}

impl Pattern {
    /// Create a pattern from alive-cell offsets, computing its bounding box
    pub fn new(
        name: &'static str,
        description: &'static str,
        category: Option<Category>,
        offsets: Vec<Offset>,
    ) -> Self {
        let rows = offsets.iter().map(|(r, _)| *r + 1).max().unwrap_or(0);
        let cols = offsets.iter().map(|(_, c)| *c + 1).max().unwrap_or(0);
        Self { name, description, category, offsets, rows, cols }
    }

    /// The harmless pattern returned for unknown names
    pub fn empty() -> Self {
        Self::new("", "", None, Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn population(&self) -> usize {
        self.offsets.len()
    }
}

impl From<PatternId> for Pattern {
    fn from(id: PatternId) -> Self {
        Pattern::new(id.name(), id.description(), Some(id.category()), id.offsets())
    }
}

/// Sidebar listing, in display order
pub const CATALOG: &[(Category, &[CatalogEntry])] = {
    use Action as A;
    use CatalogEntry::{Action as Act, Pattern as P};
    use PatternId::*;
    &[
        (Category::Controls, &[Act(A::Clear)]),
        (Category::StillLifes, &[P(Block), P(Beehive), P(Loaf), P(Boat), P(Tub)]),
        (
            Category::Oscillators,
            &[P(Blinker), P(Toad), P(Beacon), P(Pulsar), P(PentaDecathlon), P(Clock), P(FigureEight)],
        ),
        (Category::Spaceships, &[P(Glider), P(Lwss), P(Mwss), P(Hwss)]),
        (Category::Guns, &[P(GosperGliderGun), P(SimkinGliderGun)]),
        (
            Category::Duplicators,
            &[
                P(BlockerDuplicator),
                P(FourWayReplicator),
                P(SwitchEngine),
                P(BlockLayer1),
                P(GliderDuplicator),
                P(InfiniteGrowth1),
                P(InfiniteGrowth2),
                P(TenCellInfinite),
                P(LineGrower),
                P(MaxSpacefiller),
            ],
        ),
        (
            Category::Methuselahs,
            &[P(RPentomino), P(Diehard), P(Acorn), P(PiHeptomino), P(BHeptomino), P(Thunderbird)],
        ),
        (Category::PuffersAndRakes, &[P(PufferTrain), P(SpaceRake)]),
        (
            Category::Misc,
            &[P(PentadecathlonRing), P(Diamond), P(Cross), P(LobsterClaw), P(Bomb), Act(A::RandomSoup)],
        ),
    ]
};

/// Immutable catalog of every shape, built once
#[derive(Clone, Debug)]
pub struct PatternLibrary {
    patterns: Vec<Pattern>,
    empty: Pattern,
}

impl PatternLibrary {
    pub fn new() -> Self {
        Self {
            patterns: PatternId::ALL.into_iter().map(Pattern::from).collect(),
            empty: Pattern::empty(),
        }
    }

    /// Total lookup by id
    pub fn pattern(&self, id: PatternId) -> &Pattern {
        // ALL lists variants in declaration order, so the discriminant is the index
        &self.patterns[id as usize]
    }

    /// Lookup by display name. Unknown names and action names yield an
    /// empty pattern, which stamps nothing.
    pub fn get(&self, name: &str) -> &Pattern {
        match CatalogEntry::from_name(name) {
            Some(CatalogEntry::Pattern(id)) => self.pattern(id),
            _ => &self.empty,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }

    pub fn catalog(&self) -> &'static [(Category, &'static [CatalogEntry])] {
        CATALOG
    }
}

impl Default for PatternLibrary {
    fn default() -> Self {
        Self::new()
    }
}

/// Side length of the generated Bomb square
const BOMB_SIZE: i32 = 12;

#[rustfmt::skip]
mod tables {
    use super::Offset;

    pub const BLOCK: &[Offset] = &[(0, 0), (0, 1), (1, 0), (1, 1)];
    pub const BEEHIVE: &[Offset] = &[(0, 1), (0, 2), (1, 0), (1, 3), (2, 1), (2, 2)];
    pub const LOAF: &[Offset] = &[(0, 1), (0, 2), (1, 0), (1, 3), (2, 1), (2, 3), (3, 2)];
    pub const BOAT: &[Offset] = &[(0, 0), (0, 1), (1, 0), (1, 2), (2, 1)];
    pub const TUB: &[Offset] = &[(0, 1), (1, 0), (1, 2), (2, 1)];

    pub const BLINKER: &[Offset] = &[(0, 0), (1, 0), (2, 0)];
    pub const TOAD: &[Offset] = &[(1, 1), (1, 2), (1, 3), (2, 0), (2, 1), (2, 2)];
    pub const BEACON: &[Offset] = &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)];
    pub const PULSAR: &[Offset] = &[
        (2, 4), (2, 5), (2, 6), (2, 10), (2, 11), (2, 12),
        (4, 2), (4, 7), (4, 9), (4, 14),
        (5, 2), (5, 7), (5, 9), (5, 14),
        (6, 2), (6, 7), (6, 9), (6, 14),
        (7, 4), (7, 5), (7, 6), (7, 10), (7, 11), (7, 12),
        (9, 4), (9, 5), (9, 6), (9, 10), (9, 11), (9, 12),
        (10, 2), (10, 7), (10, 9), (10, 14),
        (11, 2), (11, 7), (11, 9), (11, 14),
        (12, 2), (12, 7), (12, 9), (12, 14),
        (14, 4), (14, 5), (14, 6), (14, 10), (14, 11), (14, 12),
    ];
    pub const PENTA_DECATHLON: &[Offset] = &[
        (0, 1), (1, 1), (2, 0), (2, 2), (3, 1), (4, 1),
        (5, 1), (6, 1), (7, 0), (7, 2), (8, 1), (9, 1),
    ];
    pub const CLOCK: &[Offset] = &[(0, 1), (1, 2), (1, 3), (2, 0), (2, 1), (3, 2)];
    pub const FIGURE_EIGHT: &[Offset] = &[
        (0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2), (2, 0), (2, 1), (2, 2),
        (3, 3), (3, 4), (3, 5), (4, 3), (4, 4), (4, 5), (5, 3), (5, 4), (5, 5),
    ];

    pub const GLIDER: &[Offset] = &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
    pub const LWSS: &[Offset] = &[
        (0, 1), (0, 4), (1, 0), (2, 0), (2, 4), (3, 0), (3, 1), (3, 2), (3, 3),
    ];
    pub const MWSS: &[Offset] = &[
        (0, 2), (1, 0), (1, 4), (2, 5), (3, 0), (3, 5), (4, 1), (4, 2), (4, 3), (4, 4), (4, 5),
    ];
    pub const HWSS: &[Offset] = &[
        (0, 2), (0, 3), (1, 0), (1, 5), (2, 6), (3, 0), (3, 6),
        (4, 1), (4, 2), (4, 3), (4, 4), (4, 5), (4, 6),
    ];

    pub const GOSPER_GUN: &[Offset] = &[
        (5, 1), (5, 2), (6, 1), (6, 2),
        (5, 11), (6, 11), (7, 11),
        (4, 12), (3, 13), (3, 14),
        (8, 12), (9, 13), (9, 14),
        (6, 15),
        (4, 16), (5, 17), (6, 17), (7, 17), (6, 18), (8, 16),
        (3, 21), (4, 21), (5, 21),
        (3, 22), (4, 22), (5, 22),
        (2, 23), (6, 23),
        (1, 25), (2, 25), (6, 25), (7, 25),
        (3, 35), (4, 35), (3, 36), (4, 36),
    ];
    pub const SIMKIN_GUN: &[Offset] = &[
        (0, 0), (0, 1), (1, 0), (1, 1),
        (0, 7), (0, 8), (1, 7), (1, 8),
        (3, 4), (3, 5), (4, 4), (4, 5),
        (9, 22), (9, 23), (10, 24), (11, 24), (11, 25),
        (10, 20), (11, 20), (12, 21), (13, 21), (13, 22),
        (9, 31), (9, 32), (9, 33),
        (10, 31),
        (11, 32),
        (18, 21), (18, 22), (19, 21), (19, 22),
    ];

    pub const BLOCKER_DUPLICATOR: &[Offset] = &[
        (0, 2), (0, 3), (0, 4),
        (1, 1), (1, 4),
        (2, 4),
        (3, 3),
        (4, 0), (4, 1),
        (5, 0), (5, 2),
    ];
    // Four R-pentominoes aimed outward from the center
    pub const FOUR_WAY_REPLICATOR: &[Offset] = &[
        (0, 9), (0, 10), (1, 10), (1, 11), (2, 10),
        (9, 18), (9, 19), (10, 17), (10, 18), (11, 18),
        (18, 10), (18, 11), (19, 9), (19, 10), (20, 10),
        (10, 0), (10, 1), (9, 1), (11, 1), (9, 2),
    ];
    pub const SWITCH_ENGINE: &[Offset] = &[
        (0, 0), (0, 1),
        (1, 0), (1, 1),
        (2, 0), (2, 1),
        (3, 2),
        (4, 2), (4, 3),
        (5, 3),
    ];
    pub const TEN_CELL_INFINITE: &[Offset] = &[
        (0, 6),
        (1, 4), (1, 6), (1, 7),
        (2, 4), (2, 6),
        (3, 4),
        (4, 2),
        (5, 0), (5, 2),
    ];
    // Ten-cell seed plus a stabilising block
    pub const BLOCK_LAYER_1: &[Offset] = &[
        (0, 6),
        (1, 4), (1, 6), (1, 7),
        (2, 4), (2, 6),
        (3, 4),
        (4, 2),
        (5, 0), (5, 2),
        (0, 10), (0, 11),
        (1, 10), (1, 11),
    ];
    // Two Gosper guns, the second mirrored so the streams collide
    pub const GLIDER_DUPLICATOR: &[Offset] = &[
        (5, 1), (5, 2), (6, 1), (6, 2),
        (5, 11), (6, 11), (7, 11),
        (4, 12), (3, 13), (3, 14),
        (8, 12), (9, 13), (9, 14),
        (6, 15),
        (4, 16), (5, 17), (6, 17), (7, 17), (6, 18), (8, 16),
        (3, 21), (4, 21), (5, 21),
        (3, 22), (4, 22), (5, 22),
        (2, 23), (6, 23),
        (1, 25), (2, 25), (6, 25), (7, 25),
        (3, 35), (4, 35), (3, 36), (4, 36),
        (20, 1), (20, 2), (19, 1), (19, 2),
        (20, 11), (19, 11), (18, 11),
        (21, 12), (22, 13), (22, 14),
        (17, 12), (16, 13), (16, 14),
        (19, 15),
        (21, 16), (20, 17), (19, 17), (18, 17), (19, 18), (17, 16),
        (22, 21), (21, 21), (20, 21),
        (22, 22), (21, 22), (20, 22),
        (23, 23), (19, 23),
        (24, 25), (23, 25), (19, 25), (18, 25),
        (22, 35), (21, 35), (22, 36), (21, 36),
    ];
    // Single row: 8 on, 1 off, 5 on, 3 off, 3 on, 6 off, 7 on, 1 off, 5 on
    pub const ONE_ROW_INFINITE: &[Offset] = &[
        (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6), (0, 7),
        (0, 9), (0, 10), (0, 11), (0, 12), (0, 13),
        (0, 17), (0, 18), (0, 19),
        (0, 26), (0, 27), (0, 28), (0, 29), (0, 30), (0, 31), (0, 32),
        (0, 34), (0, 35), (0, 36), (0, 37), (0, 38),
    ];
    pub const LINE_GROWER: &[Offset] = &[
        (0, 1),
        (1, 2),
        (2, 0), (2, 1), (2, 2),
        (5, 10), (5, 11),
        (6, 10), (6, 11),
        (3, 8), (3, 9),
        (4, 8), (4, 9),
    ];
    pub const MAX_SPACEFILLER: &[Offset] = &[
        (0, 14), (0, 15), (0, 16), (0, 17),
        (1, 13), (1, 17),
        (2, 17),
        (3, 13), (3, 16),
        (7, 14), (7, 15), (7, 16), (7, 17),
        (6, 13), (6, 17),
        (5, 17),
        (4, 13), (4, 16),
        (0, 5), (0, 6), (0, 7), (0, 8),
        (1, 4), (1, 8),
        (2, 8),
        (3, 4), (3, 7),
        (7, 5), (7, 6), (7, 7), (7, 8),
        (6, 4), (6, 8),
        (5, 8),
        (4, 4), (4, 7),
        (2, 0), (3, 0), (4, 0), (5, 0),
        (1, 1), (6, 1),
        (0, 2), (7, 2),
        (0, 3), (7, 3),
    ];

    pub const R_PENTOMINO: &[Offset] = &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)];
    pub const DIEHARD: &[Offset] = &[(0, 6), (1, 0), (1, 1), (2, 1), (2, 5), (2, 6), (2, 7)];
    pub const ACORN: &[Offset] = &[(0, 1), (1, 3), (2, 0), (2, 1), (2, 4), (2, 5), (2, 6)];
    pub const PI_HEPTOMINO: &[Offset] = &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 2)];
    pub const B_HEPTOMINO: &[Offset] = &[(0, 1), (1, 0), (1, 1), (1, 2), (2, 0), (2, 2), (3, 0)];
    pub const THUNDERBIRD: &[Offset] = &[(0, 0), (0, 1), (0, 2), (2, 1), (3, 1), (4, 1)];

    pub const PUFFER_TRAIN: &[Offset] = &[
        (0, 2), (1, 0), (1, 4), (2, 5), (3, 0), (3, 5), (4, 1), (4, 2), (4, 3), (4, 4), (4, 5),
        (8, 0), (9, 1), (10, 0), (10, 1),
        (12, 0), (13, 1), (14, 0), (14, 1),
        (16, 2), (17, 0), (17, 4), (18, 5), (19, 0), (19, 5), (20, 1), (20, 2), (20, 3), (20, 4), (20, 5),
    ];
    pub const SPACE_RAKE: &[Offset] = &[
        (0, 7), (0, 8), (0, 9), (0, 10),
        (1, 6), (1, 10),
        (2, 10),
        (3, 6), (3, 9),
        (5, 0), (5, 1), (5, 2), (5, 3),
        (6, 0), (6, 4),
        (7, 0),
        (8, 1), (8, 4),
        (10, 3), (10, 4), (10, 5),
        (11, 3),
        (12, 4),
    ];

    pub const PENTADECATHLON_RING: &[Offset] = &[
        (0, 5), (1, 5), (2, 4), (2, 6), (3, 5), (4, 5),
        (5, 5), (6, 5), (7, 4), (7, 6), (8, 5), (9, 5),
        (0, 15), (1, 15), (2, 14), (2, 16), (3, 15), (4, 15),
        (5, 15), (6, 15), (7, 14), (7, 16), (8, 15), (9, 15),
    ];
    pub const DIAMOND: &[Offset] = &[
        (0, 5), (1, 4), (1, 6), (2, 3), (2, 7),
        (3, 2), (3, 8), (4, 1), (4, 9),
        (5, 0), (5, 10),
        (6, 1), (6, 9), (7, 2), (7, 8),
        (8, 3), (8, 7), (9, 4), (9, 6), (10, 5),
    ];
    pub const CROSS: &[Offset] = &[
        (0, 4), (0, 5), (0, 6),
        (1, 4), (1, 5), (1, 6),
        (2, 0), (2, 1), (2, 2), (2, 3), (2, 4), (2, 5), (2, 6), (2, 7), (2, 8), (2, 9), (2, 10),
        (3, 0), (3, 1), (3, 2), (3, 3), (3, 4), (3, 5), (3, 6), (3, 7), (3, 8), (3, 9), (3, 10),
        (4, 0), (4, 1), (4, 2), (4, 3), (4, 4), (4, 5), (4, 6), (4, 7), (4, 8), (4, 9), (4, 10),
        (5, 4), (5, 5), (5, 6),
        (6, 4), (6, 5), (6, 6),
        (7, 4), (7, 5), (7, 6),
    ];
    pub const LOBSTER_CLAW: &[Offset] = &[
        (0, 2), (0, 3),
        (1, 0), (1, 1), (1, 4),
        (2, 0), (2, 4),
        (3, 1), (3, 3),
        (4, 2),
        (6, 2),
        (7, 1), (7, 3),
        (8, 0), (8, 4),
        (9, 0), (9, 1), (9, 4),
        (10, 2), (10, 3),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_ids_index_their_own_pattern() {
        let library = PatternLibrary::new();
        for id in PatternId::ALL {
            assert_eq!(library.pattern(id).name, id.name());
        }
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = PatternId::ALL.iter().map(|id| id.name()).collect();
        assert_eq!(names.len(), PatternId::ALL.len());
    }

    #[test]
    fn test_get_known_pattern() {
        let library = PatternLibrary::new();
        let glider = library.get("Glider");
        assert_eq!(glider.offsets, vec![(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]);
        assert_eq!((glider.rows, glider.cols), (3, 3));
        assert_eq!(glider.category, Some(Category::Spaceships));
    }

    #[test]
    fn test_unknown_name_is_empty() {
        let library = PatternLibrary::new();
        assert!(library.get("Not A Pattern").is_empty());
        assert!(library.get("").is_empty());
    }

    #[test]
    fn test_action_names_are_not_shapes() {
        let library = PatternLibrary::new();
        assert!(library.get("Clear").is_empty());
        assert!(library.get("Random Soup").is_empty());
        assert_eq!(
            CatalogEntry::from_name("Random Soup"),
            Some(CatalogEntry::Action(Action::RandomSoup))
        );
    }

    #[test]
    fn test_every_shape_has_cells_without_duplicates() {
        for id in PatternId::ALL {
            let offsets = id.offsets();
            assert!(!offsets.is_empty(), "{} is empty", id.name());
            let unique: HashSet<_> = offsets.iter().collect();
            assert_eq!(unique.len(), offsets.len(), "{} has duplicates", id.name());
            assert!(offsets.iter().all(|(r, c)| *r >= 0 && *c >= 0));
        }
    }

    #[test]
    fn test_bomb_is_dense_square() {
        let bomb = Pattern::from(PatternId::Bomb);
        assert_eq!(bomb.population(), 144);
        assert_eq!((bomb.rows, bomb.cols), (12, 12));
    }

    #[test]
    fn test_catalog_lists_every_entry_once() {
        let entries: Vec<_> = CATALOG.iter().flat_map(|(_, e)| e.iter().copied()).collect();
        let unique: HashSet<_> = entries.iter().copied().collect();
        assert_eq!(entries.len(), unique.len());
        assert_eq!(entries.len(), PatternId::ALL.len() + 2);
        for (category, group) in CATALOG {
            for entry in *group {
                if let CatalogEntry::Pattern(id) = entry {
                    assert_eq!(id.category(), *category);
                }
            }
        }
    }
}
