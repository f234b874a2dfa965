//! Recursive-descent parser for the demo language.
//!
//! The grammar is deliberately small: a file is a sequence of method
//! declarations, a method body is a block, and blocks may contain nested
//! method declarations, try statements, bare blocks, and expression
//! statements.

use crate::error::ParseError;
use crate::kind::NodeKind;
use crate::lexer::{tokenize, SpannedToken, Token};
use crate::node::{SyntaxNode, SyntaxTree};
use crate::span::Span;

/// Parses `source` into a [`SyntaxTree`].
///
/// The resulting tree upholds the structural invariants checked by
/// [`SyntaxTree::validate`]: parent spans contain child spans and
/// siblings appear in source order.
///
/// # Errors
///
/// Returns a [`ParseError`] carrying the span of the first offending
/// token or character.
pub fn parse(source: &str) -> Result<SyntaxTree, ParseError> {
    let tokens = tokenize(source)?;
    let mut parser = Parser {
        tokens,
        pos: 0,
        eof: Span::empty(source.len()),
    };
    let root = parser.compilation_unit(source.len())?;
    Ok(SyntaxTree::new(root, source))
}

struct Parser {
    tokens: Vec<SpannedToken>,
    pos: usize,
    eof: Span,
}

impl Parser {
    fn compilation_unit(&mut self, source_len: usize) -> Result<SyntaxNode, ParseError> {
        let mut methods = Vec::new();
        while self.peek().is_some() {
            methods.push(self.method_declaration()?);
        }
        Ok(SyntaxNode::new(
            NodeKind::CompilationUnit,
            Span::new(0, source_len),
            methods,
        ))
    }

    fn method_declaration(&mut self) -> Result<SyntaxNode, ParseError> {
        let kw = self.expect(&Token::Method, "a method declaration")?;
        let name_span = self.expect_identifier("a method name")?;
        let name = SyntaxNode::leaf(NodeKind::Identifier, name_span);
        let params = self.parameter_list()?;
        let body = self.block()?;
        let span = kw.join(body.span());
        Ok(SyntaxNode::new(
            NodeKind::MethodDeclaration,
            span,
            vec![name, params, body],
        ))
    }

    fn parameter_list(&mut self) -> Result<SyntaxNode, ParseError> {
        let open = self.expect(&Token::LParen, "'('")?;
        let mut params = Vec::new();
        if !self.at(&Token::RParen) {
            loop {
                params.push(self.parameter()?);
                if self.eat(&Token::Comma).is_none() {
                    break;
                }
            }
        }
        let close = self.expect(&Token::RParen, "')'")?;
        Ok(SyntaxNode::new(
            NodeKind::ParameterList,
            open.join(close),
            params,
        ))
    }

    // `Type name` with the name optional, as in a bare `catch (Oops)`.
    fn parameter(&mut self) -> Result<SyntaxNode, ParseError> {
        let ty = self.expect_identifier("a parameter type")?;
        let mut span = ty;
        let mut children = vec![SyntaxNode::leaf(NodeKind::Identifier, ty)];
        if let Some(name) = self.eat_identifier() {
            span = span.join(name);
            children.push(SyntaxNode::leaf(NodeKind::Identifier, name));
        }
        Ok(SyntaxNode::new(NodeKind::Parameter, span, children))
    }

    fn block(&mut self) -> Result<SyntaxNode, ParseError> {
        let open = self.expect(&Token::LBrace, "'{'")?;
        let mut statements = Vec::new();
        while !self.at(&Token::RBrace) {
            if self.peek().is_none() {
                return Err(self.error_here("'}'"));
            }
            statements.push(self.statement()?);
        }
        let close = self.expect(&Token::RBrace, "'}'")?;
        Ok(SyntaxNode::new(NodeKind::Block, open.join(close), statements))
    }

    fn statement(&mut self) -> Result<SyntaxNode, ParseError> {
        match self.peek().map(|t| &t.token) {
            Some(Token::Method) => self.method_declaration(),
            Some(Token::Try) => self.try_statement(),
            Some(Token::LBrace) => self.block(),
            Some(Token::Identifier(_) | Token::Number(_) | Token::Str(_)) => {
                let expr = self.expression()?;
                let semi = self.expect(&Token::Semicolon, "';'")?;
                let span = expr.span().join(semi);
                Ok(SyntaxNode::new(
                    NodeKind::ExpressionStatement,
                    span,
                    vec![expr],
                ))
            }
            _ => Err(self.error_here("a statement")),
        }
    }

    fn try_statement(&mut self) -> Result<SyntaxNode, ParseError> {
        let kw = self.expect(&Token::Try, "'try'")?;
        let body = self.block()?;
        let mut span = kw.join(body.span());
        let mut children = vec![body];
        while self.at(&Token::Catch) {
            let clause = self.catch_clause()?;
            span = span.join(clause.span());
            children.push(clause);
        }
        if self.at(&Token::Finally) {
            let clause = self.finally_clause()?;
            span = span.join(clause.span());
            children.push(clause);
        }
        // A try with no handler at all is not part of the grammar.
        if children.len() == 1 {
            return Err(self.error_here("'catch' or 'finally'"));
        }
        Ok(SyntaxNode::new(NodeKind::TryStatement, span, children))
    }

    fn catch_clause(&mut self) -> Result<SyntaxNode, ParseError> {
        let kw = self.expect(&Token::Catch, "'catch'")?;
        let mut children = Vec::new();
        if self.eat(&Token::LParen).is_some() {
            children.push(self.parameter()?);
            self.expect(&Token::RParen, "')'")?;
        }
        let body = self.block()?;
        let span = kw.join(body.span());
        children.push(body);
        Ok(SyntaxNode::new(NodeKind::CatchClause, span, children))
    }

    fn finally_clause(&mut self) -> Result<SyntaxNode, ParseError> {
        let kw = self.expect(&Token::Finally, "'finally'")?;
        let body = self.block()?;
        let span = kw.join(body.span());
        Ok(SyntaxNode::new(NodeKind::FinallyClause, span, vec![body]))
    }

    fn expression(&mut self) -> Result<SyntaxNode, ParseError> {
        match self.peek().map(|t| &t.token) {
            Some(Token::Identifier(_)) => self.call_or_identifier(),
            Some(Token::Number(_)) => Ok(self.literal(NodeKind::NumberLiteral)),
            Some(Token::Str(_)) => Ok(self.literal(NodeKind::StringLiteral)),
            _ => Err(self.error_here("an expression")),
        }
    }

    fn call_or_identifier(&mut self) -> Result<SyntaxNode, ParseError> {
        let name_span = self.bump_span();
        if self.at(&Token::LParen) {
            let args = self.argument_list()?;
            let span = name_span.join(args.span());
            Ok(SyntaxNode::new(
                NodeKind::CallExpression,
                span,
                vec![SyntaxNode::leaf(NodeKind::Identifier, name_span), args],
            ))
        } else {
            Ok(SyntaxNode::leaf(NodeKind::Identifier, name_span))
        }
    }

    fn argument_list(&mut self) -> Result<SyntaxNode, ParseError> {
        let open = self.expect(&Token::LParen, "'('")?;
        let mut args = Vec::new();
        if !self.at(&Token::RParen) {
            loop {
                args.push(self.expression()?);
                if self.eat(&Token::Comma).is_none() {
                    break;
                }
            }
        }
        let close = self.expect(&Token::RParen, "')'")?;
        Ok(SyntaxNode::new(
            NodeKind::ArgumentList,
            open.join(close),
            args,
        ))
    }

    fn literal(&mut self, kind: NodeKind) -> SyntaxNode {
        SyntaxNode::leaf(kind, self.bump_span())
    }

    fn peek(&self) -> Option<&SpannedToken> {
        self.tokens.get(self.pos)
    }

    fn at(&self, token: &Token) -> bool {
        self.peek().is_some_and(|t| t.token == *token)
    }

    fn bump_span(&mut self) -> Span {
        let span = self.tokens.get(self.pos).map_or(self.eof, |t| t.span);
        self.pos += 1;
        span
    }

    fn eat(&mut self, token: &Token) -> Option<Span> {
        if self.at(token) {
            Some(self.bump_span())
        } else {
            None
        }
    }

    fn eat_identifier(&mut self) -> Option<Span> {
        match self.peek() {
            Some(t) if matches!(t.token, Token::Identifier(_)) => Some(self.bump_span()),
            _ => None,
        }
    }

    fn expect(&mut self, token: &Token, what: &str) -> Result<Span, ParseError> {
        match self.peek() {
            Some(t) if t.token == *token => Ok(self.bump_span()),
            _ => Err(self.error_here(what)),
        }
    }

    fn expect_identifier(&mut self, what: &str) -> Result<Span, ParseError> {
        match self.peek() {
            Some(t) if matches!(t.token, Token::Identifier(_)) => Ok(self.bump_span()),
            _ => Err(self.error_here(what)),
        }
    }

    fn error_here(&self, expected: &str) -> ParseError {
        match self.peek() {
            Some(t) => ParseError::UnexpectedToken {
                expected: expected.to_string(),
                found: t.token.describe(),
                span: t.span,
            },
            None => ParseError::UnexpectedEof {
                expected: expected.to_string(),
                span: self.eof,
            },
        }
    }
}
