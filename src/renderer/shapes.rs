//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::draw::DrawCommand;
use super::vertex::Vertex;
use crate::sim::Rect;

/// Segments used for the ball outline
pub const CIRCLE_SEGMENTS: u32 = 24;

/// Generate vertices for a filled axis-aligned rectangle (two triangles)
pub fn rect(rect: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let x0 = rect.left() as f32;
    let y0 = rect.top() as f32;
    let x1 = rect.right() as f32;
    let y1 = rect.bottom() as f32;

    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Triangle-list vertices for a frame. Text is left to the host's font
/// rendering and produces nothing here.
pub fn tessellate(commands: &[DrawCommand]) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for command in commands {
        match command {
            DrawCommand::FillRect { rect: r, color } => vertices.extend(rect(r, *color)),
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => vertices.extend(circle(*center, *radius, *color, CIRCLE_SEGMENTS)),
            DrawCommand::Text { .. } => {}
        }
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_corners() {
        let verts = rect(&Rect::new(10, 20, 30, 40), [1.0; 4]);
        assert_eq!(verts.len(), 6);
        assert_eq!(verts[0].position, [10.0, 20.0]);
        assert_eq!(verts[5].position, [40.0, 60.0]);
    }

    #[test]
    fn test_circle_stays_within_radius() {
        let center = Vec2::new(410.0, 310.0);
        let verts = circle(center, 10.0, [1.0; 4], 16);
        assert_eq!(verts.len(), 48);
        for v in &verts {
            let p = Vec2::from(v.position);
            assert!(p.distance(center) <= 10.0 + 1e-3);
        }
    }
}
