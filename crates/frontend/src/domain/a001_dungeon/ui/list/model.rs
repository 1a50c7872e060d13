//! Pure derivations behind the dungeon list: ordering, badges, rows.

use super::tabs::Tab;
use contracts::domain::a001_dungeon::{Dungeon, DungeonId, FloorId, GameCatalog};
use contracts::shared::name_parser::parse_name;
use std::cmp::Reverse;

/// Indexed by `Dungeon::weekday`; empty entries show no badge
pub const WEEKDAYS: [&str; 9] = [
    "",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "",
    "",
    "Weekend",
];

pub fn weekday_label(weekday: u8) -> Option<&'static str> {
    WEEKDAYS
        .get(usize::from(weekday))
        .copied()
        .filter(|label| !label.is_empty())
}

/// Badge shown next to a dungeon.
///
/// Weekday label wins over the one-time marker, which wins over the badge
/// parsed from the name. A non-zero weekday with no label hides all badges.
pub fn badge_for(dungeon: &Dungeon, parsed_badge: Option<String>) -> Option<String> {
    if dungeon.weekday != 0 {
        weekday_label(dungeon.weekday).map(str::to_string)
    } else if dungeon.once {
        Some("once".to_string())
    } else {
        parsed_badge
    }
}

/// Stable sort: manually ordered dungeons first (highest order first), then
/// the rest by descending id.
pub fn sort_dungeons(dungeons: &mut [Dungeon]) {
    dungeons.sort_by_key(|dungeon| match dungeon.manual_order() {
        Some(order) => (false, Reverse(i64::from(order))),
        None => (true, Reverse(i64::from(dungeon.id))),
    });
}

/// Dungeons that appear in the wave schedule, in display order
pub fn all_dungeons(catalog: &GameCatalog) -> Vec<Dungeon> {
    let mut dungeons: Vec<Dungeon> = catalog.wave_dungeons().into_iter().cloned().collect();
    sort_dungeons(&mut dungeons);
    dungeons
}

/// Route segment to dungeon id; anything unparsable means no selection
pub fn parse_route_id(param: Option<&str>) -> Option<u32> {
    param.and_then(|raw| raw.trim().parse().ok())
}

pub fn dungeon_href(id: DungeonId) -> String {
    format!("/dungeons/{}", id)
}

pub fn floor_href(dungeon: DungeonId, floor: FloorId) -> String {
    format!("/dungeons/{}/{}", dungeon, floor)
}

/// Value of the `--dungeon-color` custom property
pub fn item_color(bg: Option<&str>) -> String {
    match bg {
        Some(bg) => format!("#{}60", bg),
        None => "transparent".to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DungeonRow {
    pub id: DungeonId,
    pub name: String,
    pub badge: Option<String>,
    pub color: String,
    pub href: String,
    pub selected: bool,
}

impl DungeonRow {
    pub fn new(dungeon: &Dungeon, selected: bool) -> Self {
        let parsed = parse_name(&dungeon.name);
        Self {
            id: dungeon.id,
            badge: badge_for(dungeon, parsed.badge),
            color: item_color(parsed.bg.as_deref()),
            name: parsed.name,
            href: dungeon_href(dungeon.id),
            selected,
        }
    }

    pub fn class(&self) -> &'static str {
        if self.selected {
            "DungeonList-item DungeonList-item-selected"
        } else {
            "DungeonList-item"
        }
    }
}

/// Rows of the active tab. `selected` must already be restricted to the tab.
pub fn dungeon_rows(all: &[Dungeon], tab: &Tab, selected: Option<DungeonId>) -> Vec<DungeonRow> {
    all.iter()
        .filter(|dungeon| tab.contains(dungeon.dungeon_type))
        .map(|dungeon| DungeonRow::new(dungeon, selected == Some(dungeon.id)))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorRow {
    pub id: FloorId,
    pub name: String,
    pub color: String,
    pub href: String,
    pub current: bool,
}

impl FloorRow {
    pub fn class(&self) -> &'static str {
        if self.current {
            "DungeonList-item DungeonList-item-current"
        } else {
            "DungeonList-item"
        }
    }
}

/// Floors newest first (reverse of stored order)
pub fn floor_rows(dungeon: &Dungeon, current: Option<FloorId>) -> Vec<FloorRow> {
    dungeon
        .floors
        .iter()
        .rev()
        .map(|floor| {
            let parsed = parse_name(&floor.name);
            FloorRow {
                id: floor.id,
                name: parsed.name,
                color: item_color(parsed.bg.as_deref()),
                href: floor_href(dungeon.id, floor.id),
                current: current == Some(floor.id),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::tabs::tab_by_label;
    use super::*;
    use contracts::domain::a001_dungeon::Floor;
    use contracts::domain::a002_wave::Wave;

    fn dungeon(id: DungeonId, dungeon_type: u32) -> Dungeon {
        Dungeon {
            id,
            name: format!("Dungeon {}", id),
            dungeon_type,
            weekday: 0,
            once: false,
            order: None,
            floors: Vec::new(),
        }
    }

    fn ordered(id: DungeonId, order: i32) -> Dungeon {
        Dungeon {
            order: Some(order),
            ..dungeon(id, 0)
        }
    }

    fn ids(dungeons: &[Dungeon]) -> Vec<DungeonId> {
        dungeons.iter().map(|d| d.id).collect()
    }

    #[test]
    fn test_ordered_before_unordered_each_descending() {
        let mut dungeons = vec![
            dungeon(5, 0),
            ordered(1, 100),
            dungeon(900, 0),
            ordered(2, 300),
            dungeon(40, 0),
            ordered(3, 200),
        ];
        sort_dungeons(&mut dungeons);
        assert_eq!(ids(&dungeons), vec![2, 3, 1, 900, 40, 5]);
    }

    #[test]
    fn test_order_beats_large_ids() {
        let mut dungeons = vec![dungeon(100_000, 0), ordered(1, 1)];
        sort_dungeons(&mut dungeons);
        assert_eq!(ids(&dungeons), vec![1, 100_000]);
    }

    #[test]
    fn test_zero_order_sorts_by_id() {
        let mut dungeons = vec![ordered(10, 0), dungeon(20, 0), ordered(1, 50)];
        sort_dungeons(&mut dungeons);
        assert_eq!(ids(&dungeons), vec![1, 20, 10]);
    }

    #[test]
    fn test_sort_is_stable_on_equal_keys() {
        let mut dungeons = vec![ordered(7, 300), ordered(3, 300), ordered(9, 300)];
        sort_dungeons(&mut dungeons);
        assert_eq!(ids(&dungeons), vec![7, 3, 9]);
    }

    #[test]
    fn test_all_dungeons_from_waves() {
        let catalog = GameCatalog::new(
            vec![dungeon(1, 0), dungeon(2, 3), dungeon(3, 1), ordered(4, 10)],
            [2, 1, 2, 4]
                .iter()
                .map(|&dungeon| Wave { dungeon })
                .collect(),
        );
        assert_eq!(ids(&all_dungeons(&catalog)), vec![4, 2, 1]);
    }

    #[test]
    fn test_badge_weekday_wins() {
        let d = Dungeon {
            weekday: 2,
            once: true,
            ..dungeon(1, 0)
        };
        assert_eq!(badge_for(&d, Some("x2".to_string())).as_deref(), Some("Tuesday"));
    }

    #[test]
    fn test_badge_once_over_parsed() {
        let d = Dungeon {
            once: true,
            ..dungeon(1, 0)
        };
        assert_eq!(badge_for(&d, Some("x2".to_string())).as_deref(), Some("once"));
    }

    #[test]
    fn test_badge_falls_back_to_parsed() {
        let d = dungeon(1, 0);
        assert_eq!(badge_for(&d, Some("x2".to_string())).as_deref(), Some("x2"));
        assert_eq!(badge_for(&d, None), None);
    }

    #[test]
    fn test_badge_blank_weekday_slots() {
        for weekday in [6, 7, 9, 200] {
            let d = Dungeon {
                weekday,
                once: true,
                ..dungeon(1, 0)
            };
            assert_eq!(badge_for(&d, Some("x2".to_string())), None, "weekday {}", weekday);
        }
        let d = Dungeon {
            weekday: 8,
            ..dungeon(1, 0)
        };
        assert_eq!(badge_for(&d, None).as_deref(), Some("Weekend"));
    }

    #[test]
    fn test_parse_route_id() {
        assert_eq!(parse_route_id(Some("101")), Some(101));
        assert_eq!(parse_route_id(Some("abc")), None);
        assert_eq!(parse_route_id(Some("")), None);
        assert_eq!(parse_route_id(Some("-3")), None);
        assert_eq!(parse_route_id(None), None);
    }

    #[test]
    fn test_rows_filtered_by_tab_and_marked() {
        let all = vec![dungeon(1, 3), dungeon(2, 0), dungeon(3, 3)];
        let gift = tab_by_label("Gift").unwrap();

        let rows = dungeon_rows(&all, gift, Some(3));
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 3]);
        assert!(!rows[0].selected);
        assert!(rows[1].selected);
        assert_eq!(rows[1].class(), "DungeonList-item DungeonList-item-selected");
        assert_eq!(rows[1].href, "/dungeons/3");
    }

    #[test]
    fn test_row_uses_parsed_name() {
        let d = Dungeon {
            name: "$ff0000$Ruby Dragon [x2]".to_string(),
            ..dungeon(1, 0)
        };
        let row = DungeonRow::new(&d, false);
        assert_eq!(row.name, "Ruby Dragon");
        assert_eq!(row.badge.as_deref(), Some("x2"));
        assert_eq!(row.color, "#ff000060");
        assert_eq!(item_color(None), "transparent");
    }

    #[test]
    fn test_floors_newest_first() {
        let d = Dungeon {
            floors: vec![
                Floor { id: 1, name: "F1".to_string() },
                Floor { id: 2, name: "F2".to_string() },
                Floor { id: 3, name: "F3".to_string() },
            ],
            ..dungeon(42, 0)
        };
        let rows = floor_rows(&d, Some(2));
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["F3", "F2", "F1"]);
        assert_eq!(rows[0].href, "/dungeons/42/3");
        assert!(rows[1].current);
        assert!(!rows[0].current);
    }
}
