use std::{collections::HashMap, env, fs};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mut reversed_args: Vec<_> = args.iter().map(|x| x.as_str()).rev().collect();

    reversed_args
        .pop()
        .expect("Expected the executable name to be the first argument, but was missing");

    let part = reversed_args.pop().expect("part number");
    let input_file = reversed_args.pop().expect("input file");
    let content = fs::read_to_string(input_file).unwrap();

    let input_data: Vec<Vec<i64>> = content
        .trim_end()
        .split('\n')
        .map(|x| x.chars().map(|c| c.to_digit(10).unwrap() as i64).collect())
        .collect();

    match part {
        "1" => {
            let result = solve_part1(&input_data);
            println!("{}", result);
        }
        "2" => {
            let result = solve_part2(&input_data);
            println!("{}", result);
        }
        _ => unreachable!("{}", part),
    }
}

const NEIGHBOR_OFFSETS: [(i64, i64); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

fn height_at(data: &[Vec<i64>], x: i64, y: i64) -> Option<i64> {
    let x_limit = data.len() as i64;
    let y_limit = data[0].len() as i64;

    if x >= 0 && x < x_limit && y >= 0 && y < y_limit {
        Some(data[x as usize][y as usize])
    } else {
        None
    }
}

fn neighbors(data: &[Vec<i64>], x: i64, y: i64) -> impl Iterator<Item = (i64, i64)> + '_ {
    NEIGHBOR_OFFSETS.iter().copied().filter_map(move |(dx, dy)| {
        let new_x = x + dx;
        let new_y = y + dy;

        height_at(data, new_x, new_y).map(|_| (new_x, new_y))
    })
}

fn low_points(data: &[Vec<i64>]) -> impl Iterator<Item = (i64, i64)> + '_ {
    data.iter().enumerate().flat_map(move |(i, row)| {
        row.iter().enumerate().filter_map(move |(j, height)| {
            let x = i as i64;
            let y = j as i64;

            // A low point is strictly lower than every 4-way neighbor.
            let is_low = neighbors(data, x, y)
                .all(|(nx, ny)| data[nx as usize][ny as usize] > *height);

            is_low.then_some((x, y))
        })
    })
}

fn solve_part1(data: &[Vec<i64>]) -> i64 {
    low_points(data)
        .map(|(x, y)| {
            log::debug!("({}, {}) is a low point", x, y);
            1 + data[x as usize][y as usize]
        })
        .sum()
}

fn flood_fill(
    data: &[Vec<i64>],
    belongs_to: &mut HashMap<(i64, i64), (i64, i64)>,
    point: (i64, i64),
    basin: (i64, i64),
) {
    let height = data[point.0 as usize][point.1 as usize];
    for neighbor in neighbors(data, point.0, point.1) {
        let neighbor_height = data[neighbor.0 as usize][neighbor.1 as usize];
        if neighbor_height == 9 {
            // height 9 points do not belong to any basin
            continue;
        }

        if neighbor_height > height && belongs_to.insert(neighbor, basin).is_none() {
            flood_fill(data, belongs_to, neighbor, basin);
        }
    }
}

fn solve_part2(data: &[Vec<i64>]) -> usize {
    let mut belongs_to: HashMap<(i64, i64), (i64, i64)> = Default::default();

    for basin in low_points(data) {
        belongs_to.insert(basin, basin);
        flood_fill(data, &mut belongs_to, basin, basin);
    }

    let mut basin_sizes: HashMap<(i64, i64), usize> = Default::default();
    for (_, basin) in belongs_to {
        basin_sizes.entry(basin).and_modify(|x| *x += 1).or_insert(1);
    }

    let mut all_basin_sizes: Vec<usize> = basin_sizes.into_values().collect();
    all_basin_sizes.sort_unstable_by(|a, b| b.cmp(a));

    all_basin_sizes.iter().take(3).product()
}

#[cfg(test)]
mod tests {
    use crate::{low_points, solve_part1, solve_part2};

    fn example() -> Vec<Vec<i64>> {
        [
            "2199943210",
            "3987894921",
            "9856789892",
            "8767896789",
            "9899965678",
        ]
        .into_iter()
        .map(|row| {
            row.chars()
                .map(|c| c.to_digit(10).unwrap() as i64)
                .collect()
        })
        .collect()
    }

    #[test]
    fn example_has_four_low_points() {
        let data = example();
        assert_eq!(low_points(&data).count(), 4);
    }

    #[test]
    fn part1_sums_risk_levels() {
        assert_eq!(solve_part1(&example()), 15);
    }

    #[test]
    fn part2_multiplies_three_largest_basins() {
        assert_eq!(solve_part2(&example()), 1134);
    }
}
