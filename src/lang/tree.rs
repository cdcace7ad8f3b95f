use super::token::{Kind, Operator, Token};
use super::Error;
use crate::error;

type Result<T> = std::result::Result<T, Error>;

pub type NodeId = usize;

/// ## Expression tree
///
/// Built one token at a time without an operator stack. Every node keeps
/// a parent link so insertion can walk up to the first ancestor that binds
/// looser than the incoming token.
#[derive(Debug)]
pub struct Tree<'a> {
    nodes: Vec<Node<'a>>,
}

#[derive(Debug)]
pub struct Node<'a> {
    pub token: Option<&'a Token>,
    pub priority: u8,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
    pub parent: Option<NodeId>,
    open: bool,
}

const OPERAND: u8 = u8::MAX;

fn priority(token: &Token) -> u8 {
    use Operator::*;
    match &token.kind {
        Kind::Operator(op) => match op {
            Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual => 1,
            Plus | Minus => 2,
            Multiply | Divide => 3,
            Negate | Sin | Cos => 4,
            LParen | RParen => OPERAND,
        },
        _ => OPERAND,
    }
}

impl<'a> Tree<'a> {
    pub const ROOT: NodeId = 0;

    pub fn build(tokens: &'a [Token]) -> Result<Tree<'a>> {
        let mut tree = Tree {
            nodes: vec![Node {
                token: None,
                priority: 0,
                left: None,
                right: None,
                parent: None,
                open: false,
            }],
        };
        let mut current = Tree::ROOT;
        for token in tokens {
            current = if token.is_operator(Operator::RParen) {
                tree.close(current, token)?
            } else {
                tree.insert(current, token)
            };
        }
        Ok(tree)
    }

    pub fn node(&self, id: NodeId) -> &Node<'a> {
        &self.nodes[id]
    }

    fn insert(&mut self, mut current: NodeId, token: &'a Token) -> NodeId {
        let stored = priority(token);
        let unary = match &token.kind {
            Kind::Operator(op) => op.is_unary() || *op == Operator::LParen,
            _ => false,
        };
        let walk = if unary { OPERAND } else { stored };
        while let Some(parent) = self.nodes[current].parent {
            let node = &self.nodes[current];
            if node.open || node.priority < walk {
                break;
            }
            current = parent;
        }
        let open = token.is_operator(Operator::LParen);
        let id = self.nodes.len();
        let left = self.nodes[current].right.take();
        if let Some(left) = left {
            self.nodes[left].parent = Some(id);
        }
        self.nodes.push(Node {
            token: Some(token),
            priority: if open { 0 } else { stored },
            left,
            right: None,
            parent: Some(current),
            open,
        });
        self.nodes[current].right = Some(id);
        id
    }

    fn close(&mut self, mut current: NodeId, token: &Token) -> Result<NodeId> {
        loop {
            if self.nodes[current].open {
                let node = &mut self.nodes[current];
                node.open = false;
                node.priority = OPERAND;
                return Ok(current);
            }
            match self.nodes[current].parent {
                Some(parent) => current = parent,
                None => {
                    return Err(error!(SyntaxError, ..&token.col; "UNMATCHED RIGHT PARENTHESIS"))
                }
            }
        }
    }
}
