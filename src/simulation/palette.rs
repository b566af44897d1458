//! Static color and building catalogs

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const GREEN: Color = Color::rgb(100, 200, 100);
pub const YELLOW: Color = Color::rgb(240, 200, 60);
pub const RED: Color = Color::rgb(220, 70, 60);

/// Kinds of buildings that can be placed next to a road
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildingKind {
    ResidentialA,
    ResidentialB,
    ResidentialC,
    ResidentialD,
    ResidentialE,
    Commercial,
}

impl BuildingKind {
    pub const ALL: [BuildingKind; 6] = [
        BuildingKind::ResidentialA,
        BuildingKind::ResidentialB,
        BuildingKind::ResidentialC,
        BuildingKind::ResidentialD,
        BuildingKind::ResidentialE,
        BuildingKind::Commercial,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BuildingKind::ResidentialA => "Residential A",
            BuildingKind::ResidentialB => "Residential B",
            BuildingKind::ResidentialC => "Residential C",
            BuildingKind::ResidentialD => "Residential D",
            BuildingKind::ResidentialE => "Residential E",
            BuildingKind::Commercial => "Commercial",
        }
    }

    /// Character used on the terminal map
    pub fn glyph(self) -> char {
        match self {
            BuildingKind::ResidentialA => 'a',
            BuildingKind::ResidentialB => 'b',
            BuildingKind::ResidentialC => 'c',
            BuildingKind::ResidentialD => 'd',
            BuildingKind::ResidentialE => 'e',
            BuildingKind::Commercial => 'C',
        }
    }

    pub fn color(self) -> Color {
        match self {
            BuildingKind::ResidentialA => Color::rgb(255, 186, 73),
            BuildingKind::ResidentialB => Color::rgb(189, 82, 82),
            BuildingKind::ResidentialC => Color::rgb(106, 153, 214),
            BuildingKind::ResidentialD => Color::rgb(143, 111, 191),
            BuildingKind::ResidentialE => Color::rgb(224, 132, 170),
            BuildingKind::Commercial => Color::rgb(96, 176, 96),
        }
    }
}
