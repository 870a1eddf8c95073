use std::collections::HashSet;

pub const MOBILE_BREAKPOINT: f64 = 768.0;
pub const LINK_DISTANCE: f64 = 150.0;
const DESKTOP_NODES: usize = 70;
const MOBILE_NODES: usize = 35;
const MAX_SPEED: f64 = 0.1;

#[derive(Clone, Debug)]
pub struct Node {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    connections: HashSet<usize>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Line { from: (f64, f64), to: (f64, f64), alpha: f64 },
    Dot { at: (f64, f64), radius: f64, alpha: f64 },
}

/// Drifting nodes that link up when they come close. Pure state, the canvas component
/// turns the [`DrawOp`]s of every frame into 2d context calls.
#[derive(Clone, Debug)]
pub struct NetworkGraph {
    width: f64,
    height: f64,
    mobile: bool,
    nodes: Vec<Node>,
}

impl NetworkGraph {
    /// `random` must yield values in `[0, 1)`.
    pub fn new(width: f64, height: f64, mut random: impl FnMut() -> f64) -> Self {
        let mobile = width < MOBILE_BREAKPOINT;
        let count = if mobile { MOBILE_NODES } else { DESKTOP_NODES };
        let nodes = (0..count)
            .map(|_| Node {
                x: random() * width,
                y: random() * height,
                vx: (random() - 0.5) * 2.0 * MAX_SPEED,
                vy: (random() - 0.5) * 2.0 * MAX_SPEED,
                radius: random() * 3.0 + 1.0,
                connections: HashSet::new(),
            })
            .collect();

        NetworkGraph { width, height, mobile, nodes }
    }

    pub fn is_mobile(&self) -> bool {
        self.mobile
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    fn line_alpha(&self, first_contact: bool) -> f64 {
        match (first_contact, self.mobile) {
            (true, false) => 0.4,
            (true, true) => 0.2,
            (false, false) => 0.2,
            (false, true) => 0.1,
        }
    }

    fn dot_alpha(&self) -> f64 {
        if self.mobile { 0.15 } else { 0.3 }
    }

    /// Advances one frame and returns what to draw, lines first for each node then the node.
    pub fn step(&mut self) -> Vec<DrawOp> {
        let mut ops = Vec::new();
        let count = self.nodes.len();

        for i in 0..count {
            {
                let node = &mut self.nodes[i];
                node.x += node.vx;
                node.y += node.vy;
                if node.x < 0.0 || node.x > self.width {
                    node.vx = -node.vx;
                }
                if node.y < 0.0 || node.y > self.height {
                    node.vy = -node.vy;
                }
            }

            for j in (i + 1)..count {
                let (ax, ay) = (self.nodes[i].x, self.nodes[i].y);
                let (bx, by) = (self.nodes[j].x, self.nodes[j].y);
                let distance = ((bx - ax).powi(2) + (by - ay).powi(2)).sqrt();
                if distance >= LINK_DISTANCE {
                    continue;
                }

                let first_contact = self.nodes[i].connections.insert(j);
                if first_contact {
                    self.nodes[j].connections.insert(i);
                }
                ops.push(DrawOp::Line {
                    from: (ax, ay),
                    to: (bx, by),
                    alpha: self.line_alpha(first_contact),
                });
            }

            let node = &self.nodes[i];
            ops.push(DrawOp::Dot {
                at: (node.x, node.y),
                radius: node.radius,
                alpha: self.dot_alpha(),
            });
        }

        ops
    }
}
