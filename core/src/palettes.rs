use serde::{Deserialize, Serialize};

use crate::color::Color;

// Color bundle for one landscape: sky fill, sun/moon disc and the ordered
// land colors. One land color means "fade toward the sky per layer", more
// than one means "cycle these across layers".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub sky: Color,
    pub sun: Color,
    pub land: Vec<Color>,
}

pub fn names() -> &'static [&'static str] {
    &[
        "Terracotta",
        "Desert",
        "Retro",
        "Candy",
        "Gold",
        "Night",
        "Forest",
        "Vintage",
        "Peach",
        "Summer",
        "Tropical",
        "Mono",
    ]
}

pub fn by_name(name: &str) -> Option<Palette> {
    match name {
        "Terracotta" => Some(terracotta()),
        "Desert" => Some(desert()),
        "Retro" => Some(retro()),
        "Candy" => Some(candy()),
        "Gold" => Some(gold()),
        "Night" => Some(night()),
        "Forest" => Some(forest()),
        "Vintage" => Some(vintage()),
        "Peach" => Some(peach()),
        "Summer" => Some(summer()),
        "Tropical" => Some(tropical()),
        "Mono" => Some(mono()),
        _ => None,
    }
}

pub fn terracotta() -> Palette {
    Palette {
        sky: [220, 196, 163, 255],
        sun: [147, 83, 60, 255],
        land: vec![
            [171, 122, 106, 255],
            [100, 100, 100, 255],
            [44, 34, 25, 255],
        ],
    }
}

pub fn desert() -> Palette {
    Palette {
        sky: [229, 206, 175, 255],
        sun: [227, 187, 125, 255],
        land: vec![[129, 67, 44, 255]],
    }
}

pub fn retro() -> Palette {
    Palette {
        sky: [88, 182, 210, 255],
        sun: [237, 222, 201, 255],
        land: vec![
            [222, 59, 50, 255],
            [228, 87, 38, 255],
            [232, 138, 26, 255],
            [237, 166, 60, 255],
        ],
    }
}

pub fn candy() -> Palette {
    Palette {
        sky: [209, 143, 169, 255],
        sun: [187, 176, 194, 255],
        land: vec![
            [168, 96, 55, 255],
            [215, 138, 102, 255],
            [206, 170, 144, 255],
            [214, 104, 93, 255],
            [189, 82, 84, 255],
        ],
    }
}

pub fn gold() -> Palette {
    Palette {
        sky: [206, 201, 179, 255],
        sun: [201, 148, 58, 255],
        land: vec![
            [116, 59, 66, 255],
            [163, 90, 45, 255],
            [180, 124, 101, 255],
        ],
    }
}

pub fn night() -> Palette {
    Palette {
        sky: [27, 25, 30, 255],
        sun: [237, 249, 239, 255],
        land: vec![
            [142, 140, 149, 255],
            [246, 220, 207, 255],
            [86, 76, 74, 255],
            [206, 150, 138, 255],
            [248, 245, 240, 255],
            [186, 215, 207, 255],
        ],
    }
}

pub fn forest() -> Palette {
    Palette {
        sky: [201, 230, 148, 255],
        sun: [245, 255, 181, 255],
        land: vec![[15, 30, 37, 255]],
    }
}

pub fn vintage() -> Palette {
    Palette {
        sky: [63, 63, 71, 255],
        sun: [220, 189, 171, 255],
        land: vec![
            [242, 170, 60, 255],
            [220, 189, 171, 255],
            [82, 88, 74, 255],
            [173, 141, 103, 255],
            [196, 114, 57, 255],
        ],
    }
}

pub fn peach() -> Palette {
    Palette {
        sky: [244, 235, 226, 255],
        sun: [210, 141, 106, 255],
        land: vec![
            [217, 183, 147, 255],
            [190, 136, 118, 255],
            [210, 141, 106, 255],
            [169, 125, 110, 255],
        ],
    }
}

pub fn summer() -> Palette {
    Palette {
        sky: [255, 240, 245, 255],
        sun: [234, 139, 95, 255],
        land: vec![[87, 166, 147, 255]],
    }
}

pub fn tropical() -> Palette {
    Palette {
        sky: [235, 231, 226, 255],
        sun: [245, 186, 205, 255],
        land: vec![[77, 196, 150, 255]],
    }
}

pub fn mono() -> Palette {
    Palette {
        sky: [197, 134, 101, 255],
        sun: [197, 134, 101, 255],
        land: vec![[197, 134, 101, 255], [197, 134, 101, 255]],
    }
}
