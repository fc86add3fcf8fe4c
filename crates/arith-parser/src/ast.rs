//! AST - Abstract Syntax Tree for arithmetic expressions

use arith_error::Position;
use arith_lexer::Token;
use std::fmt;

/// Expression tree node
///
/// Each binary node owns its two children; trees are built bottom-up by
/// the parser and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Integer or float literal
    Number(Token),

    /// `left op right`
    BinaryOperation {
        left: Box<Node>,
        op: Token,
        right: Box<Node>,
    },
}

impl Node {
    pub fn number(token: Token) -> Self {
        Node::Number(token)
    }

    pub fn binary(left: Node, op: Token, right: Node) -> Self {
        Node::BinaryOperation {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Position of the leftmost literal
    pub fn start(&self) -> &Position {
        let mut node = self;
        loop {
            match node {
                Node::Number(token) => return &token.start,
                Node::BinaryOperation { left, .. } => node = &**left,
            }
        }
    }

    /// Position just past the rightmost literal
    pub fn end(&self) -> &Position {
        let mut node = self;
        loop {
            match node {
                Node::Number(token) => return &token.end,
                Node::BinaryOperation { right, .. } => node = &**right,
            }
        }
    }

    /// Height of the tree; a lone number has depth 1
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];

        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            if let Node::BinaryOperation { left, right, .. } = node {
                stack.push((&**left, depth + 1));
                stack.push((&**right, depth + 1));
            }
        }

        deepest
    }

    /// Number of literal leaves
    pub fn count_numbers(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            match node {
                Node::Number(_) => count += 1,
                Node::BinaryOperation { left, right, .. } => {
                    stack.push(&**left);
                    stack.push(&**right);
                }
            }
        }

        count
    }

    fn is_leaf(&self) -> bool {
        matches!(self, Node::Number(_))
    }
}

/// Drops without recursion: children are moved onto a heap stack and
/// replaced by leaf placeholders.
impl Drop for Node {
    fn drop(&mut self) {
        let Node::BinaryOperation { left, op, right } = self else {
            return;
        };
        if left.is_leaf() && right.is_leaf() {
            return;
        }

        let mut stack = vec![
            std::mem::replace(&mut **left, Node::Number(op.clone())),
            std::mem::replace(&mut **right, Node::Number(op.clone())),
        ];

        while let Some(mut node) = stack.pop() {
            if let Node::BinaryOperation { left, op, right } = &mut node {
                stack.push(std::mem::replace(&mut **left, Node::Number(op.clone())));
                stack.push(std::mem::replace(&mut **right, Node::Number(op.clone())));
            }
        }
    }
}

/// Steps of the debug rendering, replayed from a stack
enum Render<'a> {
    Node(&'a Node),
    Token(&'a Token),
    Text(&'static str),
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![Render::Node(self)];

        while let Some(step) = stack.pop() {
            match step {
                Render::Node(Node::Number(token)) | Render::Token(token) => write!(f, "{}", token)?,
                Render::Node(Node::BinaryOperation { left, op, right }) => {
                    f.write_str("(")?;
                    stack.push(Render::Text(")"));
                    stack.push(Render::Node(&**right));
                    stack.push(Render::Text(", "));
                    stack.push(Render::Token(op));
                    stack.push(Render::Text(", "));
                    stack.push(Render::Node(&**left));
                }
                Render::Text(text) => f.write_str(text)?,
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arith_lexer::TokenKind;

    fn token(kind: TokenKind) -> Token {
        let pos = Position::start("test", "");
        Token::new(kind, pos.clone(), pos)
    }

    #[test]
    fn test_display() {
        let tree = Node::binary(
            Node::number(token(TokenKind::Int(2))),
            token(TokenKind::Plus),
            Node::binary(
                Node::number(token(TokenKind::Int(3))),
                token(TokenKind::Multiply),
                Node::number(token(TokenKind::Float(4.5))),
            ),
        );

        assert_eq!(tree.to_string(), "(INT:2, PLUS, (INT:3, MULTIPLY, FLOAT:4.5))");
        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.count_numbers(), 3);
    }

    fn chain(operands: usize) -> Node {
        let mut tree = Node::number(token(TokenKind::Int(1)));
        for _ in 1..operands {
            tree = Node::binary(tree, token(TokenKind::Plus), Node::number(token(TokenKind::Int(1))));
        }
        tree
    }

    #[test]
    fn test_long_chain_helpers() {
        let tree = chain(4);
        assert_eq!(
            tree.to_string(),
            "(((INT:1, PLUS, INT:1), PLUS, INT:1), PLUS, INT:1)"
        );

        let tree = chain(100_000);
        assert_eq!(tree.depth(), 100_000);
        assert_eq!(tree.count_numbers(), 100_000);
        assert!(tree.to_string().starts_with("((((INT:1, PLUS, INT:1), PLUS"));
        drop(tree);
    }

    #[test]
    fn test_drop_keeps_clones_intact() {
        let tree = chain(3);
        let copy = tree.clone();
        drop(tree);
        assert_eq!(copy.to_string(), "((INT:1, PLUS, INT:1), PLUS, INT:1)");
    }
}
