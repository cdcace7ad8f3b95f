use super::{Function, Operation, Var};
use crate::error;
use crate::lang::{Error, Kind, NodeId, Operator, Token, Tree};
use rand::Rng;

type Result<T> = std::result::Result<T, Error>;

/// Evaluate the tokens of one `Kind::Expression`.
pub fn evaluate<R: Rng>(tokens: &[Token], vars: &Var, rng: &mut R) -> Result<f64> {
    let tree = Tree::build(tokens)?;
    let mut eval = Evaluator {
        tree: &tree,
        vars,
        rng,
    };
    match tree.node(Tree::ROOT).right {
        Some(id) => eval.node(id),
        None => Err(error!(SyntaxError; "EXPECTED EXPRESSION")),
    }
}

struct Evaluator<'t, 'a, R> {
    tree: &'t Tree<'a>,
    vars: &'t Var,
    rng: &'t mut R,
}

impl<'t, 'a, R: Rng> Evaluator<'t, 'a, R> {
    fn node(&mut self, id: NodeId) -> Result<f64> {
        let tree = self.tree;
        let node = tree.node(id);
        let token = match node.token {
            Some(token) => token,
            None => return Err(error!(SyntaxError; "EXPECTED EXPRESSION")),
        };
        match &token.kind {
            Kind::Operator(Operator::LParen) => {
                self.no_left(token, node.left)?;
                self.child(token, node.right)
            }
            Kind::Operator(op) if op.is_unary() => {
                self.no_left(token, node.left)?;
                let val = self.child(token, node.right)?;
                Function::unary(*op, val)
            }
            Kind::Operator(op) => {
                let lhs = self.child(token, node.left)?;
                let rhs = self.child(token, node.right)?;
                Operation::binary(*op, lhs, rhs).map_err(|e| e.in_column(&token.col))
            }
            Kind::Number(s) => {
                self.leaf(token, node.left, node.right)?;
                match s.parse::<f64>() {
                    Ok(n) => Ok(n),
                    Err(_) => Err(error!(SyntaxError, ..&token.col; "INVALID NUMBER")),
                }
            }
            Kind::Ident(name) => {
                self.leaf(token, node.left, node.right)?;
                if name == "RND" {
                    Ok(Function::rnd(&mut *self.rng))
                } else {
                    Ok(self.vars.fetch(name))
                }
            }
            _ => Err(error!(SyntaxError, ..&token.col; "UNEXPECTED TOKEN")),
        }
    }

    fn child(&mut self, token: &Token, id: Option<NodeId>) -> Result<f64> {
        match id {
            Some(id) => self.node(id),
            None => Err(error!(SyntaxError, ..&token.col; "MISSING OPERAND")),
        }
    }

    fn no_left(&self, token: &Token, left: Option<NodeId>) -> Result<()> {
        match left {
            Some(_) => Err(error!(SyntaxError, ..&token.col; "MISSING OPERATOR")),
            None => Ok(()),
        }
    }

    fn leaf(&self, token: &Token, left: Option<NodeId>, right: Option<NodeId>) -> Result<()> {
        if left.is_some() || right.is_some() {
            Err(error!(SyntaxError, ..&token.col; "MISSING OPERATOR"))
        } else {
            Ok(())
        }
    }
}
