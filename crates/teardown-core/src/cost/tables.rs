//! Fixed categorical cost tables
//!
//! Parsing is case-insensitive and ignores internal whitespace, so the
//! dataset's "Snap fit" and an overlay's "SnapFit" resolve identically.
//! Unknown strings take an explicit fallback branch (the moderate value
//! of each table) rather than failing.

fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SafetyLevel {
    Low,
    Medium,
    High,
    Unknown,
}

impl SafetyLevel {
    pub fn parse(raw: &str) -> Self {
        match normalize(raw).as_str() {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            _ => Self::Unknown,
        }
    }

    pub fn cost(self) -> f64 {
        match self {
            Self::Low => 1.0,
            Self::Medium | Self::Unknown => 2.0,
            Self::High => 3.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FastenerType {
    SnapFit,
    Spring,
    Screws,
    Wires,
    Unknown,
}

impl FastenerType {
    pub fn parse(raw: &str) -> Self {
        match normalize(raw).as_str() {
            "snapfit" => Self::SnapFit,
            "spring" => Self::Spring,
            "screws" => Self::Screws,
            "wires" => Self::Wires,
            _ => Self::Unknown,
        }
    }

    pub fn cost(self) -> f64 {
        match self {
            Self::SnapFit => 1.0,
            Self::Spring => 1.5,
            Self::Screws | Self::Unknown => 2.0,
            Self::Wires => 3.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolType {
    Hand,
    Pull,
    PhilipsScrewdriver,
    WireCutter,
    Unknown,
}

impl ToolType {
    pub fn parse(raw: &str) -> Self {
        match normalize(raw).as_str() {
            "hand" => Self::Hand,
            "pull" => Self::Pull,
            "philipsscrewdriver" => Self::PhilipsScrewdriver,
            "wirecutter" => Self::WireCutter,
            _ => Self::Unknown,
        }
    }

    pub fn cost(self) -> f64 {
        match self {
            Self::Hand | Self::Unknown => 1.0,
            Self::Pull => 1.5,
            Self::PhilipsScrewdriver => 2.0,
            Self::WireCutter => 3.0,
        }
    }
}

/// Penalty bucket for the number of fasteners on an edge:
/// absent or fewer than 3 -> 1, 3-4 -> 2, 5 and up -> 3.
pub fn fastener_count_penalty(count: Option<i64>) -> f64 {
    match count {
        None => 1.0,
        Some(c) if c <= 2 => 1.0,
        Some(c) if c <= 4 => 2.0,
        Some(_) => 3.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safety_table() {
        assert_eq!(SafetyLevel::parse("Low").cost(), 1.0);
        assert_eq!(SafetyLevel::parse("medium").cost(), 2.0);
        assert_eq!(SafetyLevel::parse("HIGH").cost(), 3.0);
        assert_eq!(SafetyLevel::parse("extreme").cost(), 2.0);
    }

    #[test]
    fn test_fastener_table_ignores_spacing() {
        assert_eq!(FastenerType::parse("Snap fit"), FastenerType::SnapFit);
        assert_eq!(FastenerType::parse("SnapFit"), FastenerType::SnapFit);
        assert_eq!(FastenerType::parse("glue").cost(), 2.0);
    }

    #[test]
    fn test_tool_table() {
        assert_eq!(ToolType::parse("Philips screwdriver").cost(), 2.0);
        assert_eq!(ToolType::parse("Wire cutter").cost(), 3.0);
        assert_eq!(ToolType::parse("laser").cost(), 1.0);
    }

    #[test]
    fn test_fastener_count_buckets() {
        assert_eq!(fastener_count_penalty(None), 1.0);
        assert_eq!(fastener_count_penalty(Some(-1)), 1.0);
        assert_eq!(fastener_count_penalty(Some(0)), 1.0);
        assert_eq!(fastener_count_penalty(Some(2)), 1.0);
        assert_eq!(fastener_count_penalty(Some(3)), 2.0);
        assert_eq!(fastener_count_penalty(Some(4)), 2.0);
        assert_eq!(fastener_count_penalty(Some(5)), 3.0);
    }
}
