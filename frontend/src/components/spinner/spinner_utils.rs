use shared::shared_spinner_game::{occupancy, Entrant, Slot};
use yew::prelude::*;

/// Tailwind classes for a slot tile of the given entrant color. Unknown
/// colors fall back to gray rather than rendering an unstyled tile.
pub fn slot_classes(color: &str) -> &'static str {
    match color {
        "blue" => "bg-gradient-to-b from-blue-500 to-blue-700",
        "red" => "bg-gradient-to-b from-red-500 to-red-700",
        "green" => "bg-gradient-to-b from-green-500 to-green-700",
        "yellow" => "bg-gradient-to-b from-yellow-400 to-yellow-600",
        "purple" => "bg-gradient-to-b from-purple-500 to-purple-700",
        "orange" => "bg-gradient-to-b from-orange-500 to-orange-700",
        "pink" => "bg-gradient-to-b from-pink-500 to-pink-700",
        "indigo" => "bg-gradient-to-b from-indigo-500 to-indigo-700",
        "violet" => "bg-gradient-to-b from-violet-500 to-violet-700",
        _ => "bg-gradient-to-b from-gray-500 to-gray-700",
    }
}

pub fn dot_classes(color: &str) -> &'static str {
    match color {
        "blue" => "bg-blue-500",
        "red" => "bg-red-500",
        "green" => "bg-green-500",
        "yellow" => "bg-yellow-400",
        "purple" => "bg-purple-500",
        "orange" => "bg-orange-500",
        "pink" => "bg-pink-500",
        "indigo" => "bg-indigo-500",
        "violet" => "bg-violet-500",
        _ => "bg-gray-500",
    }
}

#[derive(Properties, PartialEq)]
pub struct OccupancyCardProps {
    pub entrant: Entrant,
    pub slots: Vec<Slot>,
}

/// One row of the players-info panel: color dot, name, weight and the share
/// of the sequence the entrant actually received.
#[function_component(OccupancyCard)]
pub fn occupancy_card(props: &OccupancyCardProps) -> Html {
    let occ = occupancy(&props.slots, props.entrant.id);

    html! {
        <div class="flex items-center justify-between gap-3 px-3 py-2 rounded-lg bg-white/5 border border-white/10">
            <div class="flex items-center gap-2">
                <span class={classes!("w-3", "h-3", "rounded-full", dot_classes(&props.entrant.color))}></span>
                <span class="text-sm font-medium">{ &props.entrant.name }</span>
            </div>
            <div class="text-xs text-white/60">
                { format!("w {} · {} slots · {}%", props.entrant.weight, occ.count, occ.percentage) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_colors_map_to_their_classes() {
        assert!(slot_classes("blue").contains("blue"));
        assert!(dot_classes("purple").contains("purple"));
    }

    #[test]
    fn test_unknown_color_falls_back_to_gray() {
        assert!(slot_classes("magenta").contains("gray"));
        assert!(dot_classes("").contains("gray"));
    }
}
