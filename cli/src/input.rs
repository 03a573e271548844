/// Parses a human move typed as "x,y".
pub fn parse_coordinates(line: &str) -> Result<(usize, usize), String> {
    let mut parts = line.trim().split(',');

    let x_part = parts.next().unwrap_or("");
    let y_part = parts
        .next()
        .ok_or_else(|| "expected two coordinates separated by a comma".to_string())?;
    if parts.next().is_some() {
        return Err("expected exactly two coordinates".to_string());
    }

    let x = parse_coordinate(x_part)?;
    let y = parse_coordinate(y_part)?;
    Ok((x, y))
}

fn parse_coordinate(part: &str) -> Result<usize, String> {
    part.trim()
        .parse()
        .map_err(|_| format!("'{}' is not a valid coordinate", part.trim()))
}
