//! OFF (Object File Format) mesh loading
//!
//! ```text
//! OFF
//! <vertex count> <face count> <edge count>
//! x y z                 (per vertex)
//! n i0 i1 ... i(n-1)    (per face, polygons fan-triangulated)
//! ```
//! `#` starts a comment. The loaded mesh is centred and scaled so its largest
//! extent is 1, with smooth per-vertex normals.

use std::path::Path;

use glam::Vec3;

use super::Mesh;
use crate::error::MeshError;

pub fn load_off(path: &Path) -> Result<Mesh, MeshError> {
    let text = std::fs::read_to_string(path)?;
    parse_off(&text)
}

pub fn parse_off(text: &str) -> Result<Mesh, MeshError> {
    // (line number, tokens) for every non-blank, non-comment line
    let content_lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let content = line.split('#').next().unwrap_or("").trim();
            (!content.is_empty()).then(|| (i + 1, content))
        })
        .collect();
    let mut lines = content_lines.into_iter();

    let (line_no, header) = lines.next().ok_or(MeshError::Empty)?;
    let mut header_tokens = header.split_whitespace();
    if header_tokens.next() != Some("OFF") {
        return Err(parse_error(line_no, "missing OFF header"));
    }

    // Counts may share the header line
    let rest: Vec<&str> = header_tokens.collect();
    let (count_line, count_tokens) = if rest.is_empty() {
        let (n, line) = lines
            .next()
            .ok_or_else(|| parse_error(line_no, "missing element counts"))?;
        (n, line.split_whitespace().collect::<Vec<_>>())
    } else {
        (line_no, rest)
    };
    if count_tokens.len() < 2 {
        return Err(parse_error(count_line, "expected vertex and face counts"));
    }
    let vertex_count: usize = parse_token(count_tokens[0], count_line)?;
    let face_count: usize = parse_token(count_tokens[1], count_line)?;
    // Every element needs its own line
    let remaining = lines.len();
    if vertex_count
        .checked_add(face_count)
        .is_none_or(|needed| needed > remaining)
    {
        return Err(parse_error(
            count_line,
            &format!(
                "{} vertices and {} faces declared but only {} lines follow",
                vertex_count, face_count, remaining
            ),
        ));
    }

    let mut positions = Vec::with_capacity(vertex_count);
    for _ in 0..vertex_count {
        let (n, line) = lines
            .next()
            .ok_or_else(|| parse_error(count_line, "file ends before all vertices"))?;
        let coords: Vec<f32> = line
            .split_whitespace()
            .take(3)
            .map(|t| parse_token(t, n))
            .collect::<Result<_, _>>()?;
        if coords.len() < 3 {
            return Err(parse_error(n, "vertex needs three coordinates"));
        }
        positions.push(Vec3::new(coords[0], coords[1], coords[2]));
    }

    let mut triangles: Vec<[usize; 3]> = Vec::new();
    for _ in 0..face_count {
        let (n, line) = lines
            .next()
            .ok_or_else(|| parse_error(count_line, "file ends before all faces"))?;
        let mut tokens = line.split_whitespace();
        let corner_count: usize = match tokens.next() {
            Some(t) => parse_token(t, n)?,
            None => return Err(parse_error(n, "empty face")),
        };
        let corners: Vec<usize> = tokens
            .take(corner_count)
            .map(|t| parse_token(t, n))
            .collect::<Result<_, _>>()?;
        if corners.len() < corner_count || corner_count < 3 {
            return Err(parse_error(n, "face needs at least three vertex indices"));
        }
        if let Some(&bad) = corners.iter().find(|&&i| i >= positions.len()) {
            return Err(parse_error(n, &format!("vertex index {} out of range", bad)));
        }
        for k in 1..corner_count - 1 {
            triangles.push([corners[0], corners[k], corners[k + 1]]);
        }
    }

    if triangles.is_empty() {
        return Err(MeshError::Empty);
    }

    normalize_extent(&mut positions);
    Ok(build_smooth(&positions, &triangles))
}

fn parse_token<T: std::str::FromStr>(token: &str, line: usize) -> Result<T, MeshError> {
    token
        .parse()
        .map_err(|_| parse_error(line, &format!("invalid number '{}'", token)))
}

fn parse_error(line: usize, message: &str) -> MeshError {
    MeshError::Parse {
        line,
        message: message.to_string(),
    }
}

/// Centre on the bounding box and scale the largest side to 1
fn normalize_extent(positions: &mut [Vec3]) {
    let (min, max) = positions.iter().fold(
        (Vec3::splat(f32::INFINITY), Vec3::splat(f32::NEG_INFINITY)),
        |(lo, hi), &p| (lo.min(p), hi.max(p)),
    );
    let center = (min + max) * 0.5;
    let extent = (max - min).max_element();
    let scale = if extent > 0.0 { 1.0 / extent } else { 1.0 };
    for p in positions.iter_mut() {
        *p = (*p - center) * scale;
    }
}

/// Expand indexed triangles, averaging face normals at shared vertices
fn build_smooth(positions: &[Vec3], triangles: &[[usize; 3]]) -> Mesh {
    let mut accumulated = vec![Vec3::ZERO; positions.len()];
    for &[a, b, c] in triangles {
        // Area-weighted: the unnormalized cross product
        let face = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
        accumulated[a] += face;
        accumulated[b] += face;
        accumulated[c] += face;
    }
    let normals: Vec<Vec3> = accumulated
        .into_iter()
        .map(|n| n.try_normalize().unwrap_or(Vec3::Z))
        .collect();

    let mut mesh = Mesh::default();
    for &[a, b, c] in triangles {
        mesh.push_triangle(
            positions[a],
            positions[b],
            positions[c],
            [normals[a], normals[b], normals[c]],
        );
    }
    mesh
}
