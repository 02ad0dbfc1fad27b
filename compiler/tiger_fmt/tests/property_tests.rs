//! Property-based tests for the renderer.
//!
//! These tests use proptest to generate random resolved trees and verify:
//! 1. Reparse: a rendered arithmetic tree parses back to the same tree
//! 2. Additivity: verbose output minus its comments equals plain output
//! 3. Escaping: escaped string contents decode back to the input

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    reason = "Proptest macros generate code with these patterns"
)]

use std::sync::Once;

use proptest::prelude::*;
use tiger_fmt::{escape_string, render_to_string, RenderConfig};
use tiger_ir::{AstBuilder, BinaryOp, DeclId, ExprId};

static TRACING_INIT: Once = Once::new();

/// Route renderer spans to the test output when `RUST_LOG` is set.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_test_writer())
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

// -- Arithmetic Trees --

#[derive(Clone, Debug, PartialEq, Eq)]
enum Arith {
    Int(i32),
    Binary(BinaryOp, Box<Arith>, Box<Arith>),
}

fn op_strategy() -> impl Strategy<Value = BinaryOp> {
    prop::sample::select(BinaryOp::ALL.to_vec())
}

fn arith_strategy() -> impl Strategy<Value = Arith> {
    any::<i32>()
        .prop_map(Arith::Int)
        .prop_recursive(8, 128, 2, |inner| {
            (op_strategy(), inner.clone(), inner)
                .prop_map(|(op, l, r)| Arith::Binary(op, Box::new(l), Box::new(r)))
        })
}

fn build_arith(b: &mut AstBuilder, tree: &Arith) -> ExprId {
    match tree {
        Arith::Int(v) => b.int(*v),
        Arith::Binary(op, l, r) => {
            let l = build_arith(b, l);
            let r = build_arith(b, r);
            b.binary(*op, l, r)
        }
    }
}

/// Minimal reader for rendered arithmetic: `int | "(" expr op expr ")"`.
struct ArithParser<'a> {
    rest: &'a str,
}

impl<'a> ArithParser<'a> {
    fn parse(text: &'a str) -> Option<Arith> {
        let mut parser = ArithParser { rest: text };
        let tree = parser.expr()?;
        parser.rest.is_empty().then_some(tree)
    }

    fn eat(&mut self, token: &str) -> bool {
        match self.rest.strip_prefix(token) {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    fn expr(&mut self) -> Option<Arith> {
        if self.eat("(") {
            let left = self.expr()?;
            if !self.eat(" ") {
                return None;
            }
            let op = self.op()?;
            if !self.eat(" ") {
                return None;
            }
            let right = self.expr()?;
            if !self.eat(")") {
                return None;
            }
            return Some(Arith::Binary(op, Box::new(left), Box::new(right)));
        }
        let digits = self
            .rest
            .char_indices()
            .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && c == '-')))
            .map_or(self.rest.len(), |(i, _)| i);
        let (number, rest) = self.rest.split_at(digits);
        self.rest = rest;
        number.parse().ok().map(Arith::Int)
    }

    fn op(&mut self) -> Option<BinaryOp> {
        // Two-character symbols first so `<=` is not read as `<`.
        let mut ops = BinaryOp::ALL.to_vec();
        ops.sort_by_key(|op| std::cmp::Reverse(op.as_symbol().len()));
        ops.into_iter().find(|op| self.eat(op.as_symbol()))
    }
}

// -- Mixed Trees --

#[derive(Clone, Debug)]
enum Mixed {
    Int(i32),
    Var(usize),
    Binary(BinaryOp, Box<Mixed>, Box<Mixed>),
    Seq(Vec<Mixed>),
    If(Box<Mixed>, Box<Mixed>, Box<Mixed>),
    Call(Vec<Mixed>),
    Assign(usize, Box<Mixed>),
    While(Box<Mixed>, bool),
}

const VARS: usize = 3;

fn mixed_strategy() -> impl Strategy<Value = Mixed> {
    let leaf = prop_oneof![
        any::<i32>().prop_map(Mixed::Int),
        (0..VARS).prop_map(Mixed::Var),
    ];
    leaf.prop_recursive(5, 48, 3, |inner| {
        prop_oneof![
            (op_strategy(), inner.clone(), inner.clone())
                .prop_map(|(op, l, r)| Mixed::Binary(op, Box::new(l), Box::new(r))),
            prop::collection::vec(inner.clone(), 1..4).prop_map(Mixed::Seq),
            (inner.clone(), inner.clone(), inner.clone()).prop_map(|(c, t, e)| {
                Mixed::If(Box::new(c), Box::new(t), Box::new(e))
            }),
            prop::collection::vec(inner.clone(), 0..3).prop_map(Mixed::Call),
            (0..VARS, inner.clone()).prop_map(|(v, e)| Mixed::Assign(v, Box::new(e))),
            (inner, any::<bool>()).prop_map(|(c, brk)| Mixed::While(Box::new(c), brk)),
        ]
    })
}

/// Everything the resolver would have attached.
struct Scope {
    vars: Vec<DeclId>,
    fun: DeclId,
}

fn build_mixed(b: &mut AstBuilder, scope: &Scope, tree: &Mixed, depth: u32) -> ExprId {
    match tree {
        Mixed::Int(v) => b.int(*v),
        Mixed::Var(i) => {
            b.at_depth(depth);
            let id = b.ident(&format!("v{i}"));
            b.resolve(id, scope.vars[*i]);
            id
        }
        Mixed::Binary(op, l, r) => {
            let l = build_mixed(b, scope, l, depth);
            let r = build_mixed(b, scope, r, depth);
            b.binary(*op, l, r)
        }
        Mixed::Seq(items) => {
            let ids: Vec<_> = items
                .iter()
                .map(|item| build_mixed(b, scope, item, depth))
                .collect();
            b.seq(ids)
        }
        Mixed::If(c, t, e) => {
            let c = build_mixed(b, scope, c, depth);
            let t = build_mixed(b, scope, t, depth + 1);
            let e = build_mixed(b, scope, e, depth + 1);
            b.if_then_else(c, t, e)
        }
        Mixed::Call(args) => {
            let ids: Vec<_> = args
                .iter()
                .map(|arg| build_mixed(b, scope, arg, depth))
                .collect();
            let call = b.call("f", ids);
            b.resolve(call, scope.fun);
            call
        }
        Mixed::Assign(i, rhs) => {
            b.at_depth(depth);
            let lhs = b.ident(&format!("v{i}"));
            b.resolve(lhs, scope.vars[*i]);
            let rhs = build_mixed(b, scope, rhs, depth);
            b.assign(lhs, rhs)
        }
        Mixed::While(cond, with_break) => {
            let cond = build_mixed(b, scope, cond, depth);
            let body = if *with_break { b.brk() } else { b.int(0) };
            let looped = b.while_loop(cond, body);
            b.resolve_break(body, looped);
            looped
        }
    }
}

/// Wrap `tree` in a `let` declaring the variables and function it uses.
fn build_program(tree: &Mixed, escapes: [bool; VARS]) -> (tiger_ir::Ast, ExprId) {
    let mut b = AstBuilder::new();
    b.at(1, 1);
    let mut vars = Vec::with_capacity(VARS);
    for (i, escapes) in escapes.into_iter().enumerate() {
        let init = b.int(0);
        let decl = b.var(&format!("v{i}"), init);
        b.set_escapes(decl, escapes);
        vars.push(decl);
    }
    let param = b.param("n", Some("int"));
    let body = b.ident("n");
    b.resolve(body, param);
    let fun = b.fun("f", [param], Some("int"), body);
    b.set_external_name(fun, "f_lowered");

    let mut decls = vars.clone();
    decls.push(fun);
    let scope = Scope { vars, fun };

    b.at(2, 1);
    let expr = build_mixed(&mut b, &scope, tree, 0);
    let root = b.let_in(decls, [expr]);
    (b.finish(), root)
}

/// Remove every `/* ... */` comment.
fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find("/*") {
        out.push_str(&rest[..start]);
        match rest[start..].find("*/") {
            Some(end) => rest = &rest[start + end + 2..],
            None => {
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Invert the escape set.
fn unescape(text: &str) -> Option<String> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        out.push(match chars.next()? {
            '"' => '"',
            '\\' => '\\',
            'a' => '\x07',
            'b' => '\x08',
            't' => '\t',
            'n' => '\n',
            'v' => '\x0B',
            'f' => '\x0C',
            'r' => '\r',
            _ => return None,
        });
    }
    Some(out)
}

proptest! {
    #[test]
    fn rendered_arithmetic_reparses(tree in arith_strategy()) {
        init_tracing();
        let mut b = AstBuilder::new();
        let root = build_arith(&mut b, &tree);
        let ast = b.finish();

        let text = render_to_string(&ast, root, RenderConfig::default()).unwrap();
        prop_assert!(!text.contains('\n'));
        prop_assert_eq!(ArithParser::parse(&text), Some(tree));
    }

    #[test]
    fn verbose_comments_are_additive(
        tree in mixed_strategy(),
        escapes in any::<[bool; VARS]>(),
    ) {
        init_tracing();
        let (ast, root) = build_program(&tree, escapes);

        let plain = render_to_string(&ast, root, RenderConfig::default()).unwrap();
        let verbose = render_to_string(&ast, root, RenderConfig::verbose()).unwrap();
        prop_assert!(!plain.contains("/*"));
        prop_assert_eq!(strip_comments(&verbose), plain);
    }

    #[test]
    fn plain_output_ignores_escape_flags(tree in mixed_strategy()) {
        init_tracing();
        let (ast, root) = build_program(&tree, [false; VARS]);
        let (escaping, escaping_root) = build_program(&tree, [true; VARS]);

        let config = RenderConfig::default();
        prop_assert_eq!(
            render_to_string(&ast, root, config).unwrap(),
            render_to_string(&escaping, escaping_root, config).unwrap()
        );
    }

    #[test]
    fn rendering_is_deterministic(tree in mixed_strategy(), indent in 1usize..6) {
        let (ast, root) = build_program(&tree, [true, false, true]);
        let config = RenderConfig { indent_size: indent, verbose: true };
        prop_assert_eq!(
            render_to_string(&ast, root, config).unwrap(),
            render_to_string(&ast, root, config).unwrap()
        );
    }

    #[test]
    fn escaped_strings_decode(value in any::<String>()) {
        let escaped = escape_string(&value);
        for c in ['\n', '\t', '\r', '\x07', '\x08', '\x0B', '\x0C'] {
            prop_assert!(!escaped.contains(c));
        }
        prop_assert_eq!(unescape(&escaped), Some(value));
    }

    #[test]
    fn string_literal_renders_quoted(value in "[ -~\t\n]{0,24}") {
        let mut b = AstBuilder::new();
        let root = b.string(&value);
        let ast = b.finish();

        let text = render_to_string(&ast, root, RenderConfig::default()).unwrap();
        prop_assert!(text.starts_with('"') && text.ends_with('"') && text.len() >= 2);
        prop_assert_eq!(unescape(&text[1..text.len() - 1]), Some(value));
    }
}
