// File: crates/gauge-core/src/command.rs
// Summary: Renderer-agnostic display list: arcs, lines, polygons, text and rectangles.

use crate::color::Color;
use crate::geometry::{Point, RectF, Rotation};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

/// Which gauge element a command draws; lets tests and backends filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Part {
    BandArc,
    LeadingTick,
    SplitTick,
    MinorTick,
    Pointer,
    Value,
    Unit,
    Title,
    Button,
    ButtonLabel,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Stroked arc of the ellipse inscribed in `oval`; angles in degrees,
    /// clockwise from +x, butt caps.
    Arc {
        part: Part,
        oval: RectF,
        start_angle: f32,
        sweep_angle: f32,
        stroke: Stroke,
        rotation: Option<Rotation>,
    },
    Line {
        part: Part,
        from: Point,
        to: Point,
        stroke: Stroke,
        rotation: Option<Rotation>,
    },
    /// Closed, filled polygon.
    Polygon {
        part: Part,
        points: Vec<Point>,
        fill: Color,
        rotation: Option<Rotation>,
    },
    /// Filled text centered on `origin.x`; `origin.y` is the baseline.
    Text {
        part: Part,
        text: String,
        origin: Point,
        size: f32,
        color: Color,
    },
    /// Filled rectangle, rounded when `corner_radius` is set.
    Rect {
        part: Part,
        rect: RectF,
        fill: Color,
        corner_radius: Option<f32>,
    },
}

impl DrawCommand {
    pub fn part(&self) -> Part {
        match self {
            DrawCommand::Arc { part, .. }
            | DrawCommand::Line { part, .. }
            | DrawCommand::Polygon { part, .. }
            | DrawCommand::Text { part, .. }
            | DrawCommand::Rect { part, .. } => *part,
        }
    }

    pub fn rotation(&self) -> Option<Rotation> {
        match self {
            DrawCommand::Arc { rotation, .. }
            | DrawCommand::Line { rotation, .. }
            | DrawCommand::Polygon { rotation, .. } => *rotation,
            DrawCommand::Text { .. } | DrawCommand::Rect { .. } => None,
        }
    }
}

/// One frame's worth of drawing, in paint order.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct DisplayList {
    pub width: u32,
    pub height: u32,
    pub commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, commands: Vec::new() }
    }

    pub fn push(&mut self, cmd: DrawCommand) {
        self.commands.push(cmd);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawCommand> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn of_part(&self, part: Part) -> impl Iterator<Item = &DrawCommand> + '_ {
        self.commands.iter().filter(move |c| c.part() == part)
    }

    pub fn count(&self, part: Part) -> usize {
        self.of_part(part).count()
    }

    /// Text of the first command for `part`, if it is a text command.
    pub fn text_of(&self, part: Part) -> Option<&str> {
        self.of_part(part).find_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl<'a> IntoIterator for &'a DisplayList {
    type Item = &'a DrawCommand;
    type IntoIter = std::slice::Iter<'a, DrawCommand>;
    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}
