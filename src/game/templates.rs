use crate::model::{Difficulty, GridTemplate};

// The shipped layouts. Every pattern is point-symmetric, keeps runs between
// 3 and 9 cells, and leaves no cell outside a word. Most letter cells sit on
// an across run, which is what lets a plain two-pass fill hit the ratio gate.

const CAUSEWAY: &str = "
    ....#....
    ....#....
    ....#....
    ###...###
    .........
    ###...###
    ....#....
    ....#....
    ....#....";

const FOURWAYS: &str = "
    ...#.....
    ...#.....
    ...#.....
    .........
    ####.####
    .........
    .....#...
    .....#...
    .....#...";

const PROMENADE: &str = "
    ....#........
    ....#........
    ....#........
    ....#........
    ###...#...###
    ...#.....#...
    .....#.#.....
    ...#.....#...
    ###...#...###
    ........#....
    ........#....
    ........#....
    ........#....";

const BREAKWATER: &str = "
    ...#.......
    ...#.......
    ...#.......
    .......#...
    ###.....###
    ....###....
    ###.....###
    ...#.......
    .......#...
    .......#...
    .......#...";

const CROWSNEST: &str = "
    ......#......
    ......#......
    ......#......
    ......#......
    ###.#.....###
    ...#.....#...
    .....#.#.....
    ...#.....#...
    ###.....#.###
    ......#......
    ......#......
    ......#......
    ......#......";

const SPYGLASS: &str = "
    .....#.........
    .....#.........
    .....#.........
    ........#......
    ###...#.....###
    ...#.......#...
    .......#.......
    ....##...##....
    .......#.......
    ...#.......#...
    ###.....#...###
    ......#........
    .........#.....
    .........#.....
    .........#.....";

const RIPTIDE: &str = "
    ......#........
    ......#........
    ......#........
    .....#.........
    ###.#.......###
    ...#......#....
    ......#........
    .....#.#.#.....
    ........#......
    ....#......#...
    ###.......#.###
    .........#.....
    ........#......
    ........#......
    ........#......";

const LATTICE: &str = "
    .....#...#.....
    .....#...#.....
    .....#...#.....
    #......#......#
    .##.........##.
    ....#.....#....
    ...#.......#...
    #.....#.#.....#
    ...#.......#...
    ....#.....#....
    .##.........##.
    #......#......#
    .....#...#.....
    .....#...#.....
    .....#...#.....";

fn catalog() -> Vec<(&'static str, Difficulty, &'static str)> {
    vec![
        ("causeway", Difficulty::Easy, CAUSEWAY),
        ("fourways", Difficulty::Easy, FOURWAYS),
        ("promenade", Difficulty::Easy, PROMENADE),
        ("breakwater", Difficulty::Medium, BREAKWATER),
        ("crowsnest", Difficulty::Medium, CROWSNEST),
        ("spyglass", Difficulty::Medium, SPYGLASS),
        ("riptide", Difficulty::Hard, RIPTIDE),
        ("lattice", Difficulty::Hard, LATTICE),
    ]
}

pub fn builtin() -> Vec<GridTemplate> {
    catalog()
        .into_iter()
        .map(|(name, difficulty, pattern)| {
            GridTemplate::parse(name, difficulty, pattern).expect("builtin template must validate")
        })
        .collect()
}
