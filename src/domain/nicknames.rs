use crate::domain::number::Number;

/// Традиционное прозвище номера для ведущего ("22 -> Two Little Ducks").
///
/// Для корректности игры не нужно: просто пробрасывается в `NumberCalled`.
pub fn nickname(number: Number) -> Option<&'static str> {
    let name = match number {
        1 => "Nelson's Column",
        2 => "One Little Duck",
        3 => "Cup of Tea",
        4 => "Knock at the Door",
        5 => "Man Alive",
        6 => "Tom Mix",
        7 => "Lucky Seven",
        8 => "Garden Gate",
        9 => "Doctor's Orders",
        10 => "Boris's Den",
        11 => "Legs Eleven",
        12 => "One Dozen",
        13 => "Unlucky for Some",
        14 => "Valentine's Day",
        15 => "Young and Keen",
        16 => "Sweet Sixteen",
        17 => "Dancing Queen",
        18 => "Coming of Age",
        19 => "Goodbye Teens",
        20 => "One Score",
        21 => "Royal Salute",
        22 => "Two Little Ducks",
        23 => "Thee and Me",
        25 => "Duck and Dive",
        26 => "Half a Crown",
        27 => "Duck and a Crutch",
        28 => "In a State",
        29 => "Rise and Shine",
        30 => "Dirty Gertie",
        31 => "Get Up and Run",
        32 => "Buckle My Shoe",
        33 => "Two Little Fleas",
        39 => "Steps",
        40 => "Naughty Forty",
        44 => "Droopy Drawers",
        45 => "Halfway There",
        48 => "Four Dozen",
        50 => "Half Century",
        52 => "Deck of Cards",
        55 => "Snakes Alive",
        57 => "Heinz Varieties",
        59 => "Brighton Line",
        64 => "Almost Retired",
        65 => "Retirement Age",
        66 => "Clickety Click",
        69 => "Either Way Up",
        76 => "Trombones",
        77 => "Sunset Strip",
        80 => "Gandhi's Breakfast",
        88 => "Two Fat Ladies",
        89 => "Nearly There",
        90 => "Top of the Shop",
        _ => return None,
    };
    Some(name)
}
