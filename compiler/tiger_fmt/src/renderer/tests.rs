use super::*;
use tiger_ir::{AstBuilder, Type};

fn render_default(ast: &Ast, root: impl Into<NodeId>) -> String {
    match render_to_string(ast, root, RenderConfig::default()) {
        Ok(text) => text,
        Err(err) => panic!("render failed: {err}"),
    }
}

#[test]
fn resolved_type_annotation_skips_void_and_undefined() {
    let mut b = AstBuilder::new();
    let n = b.param("n", None);
    let v = b.param("v", None);
    let u = b.param("u", None);
    b.set_type(n, Type::Int)
        .set_type(v, Type::Void)
        .set_type(u, Type::Undefined);
    let body = b.int(0);
    let f = b.fun("f", [n, v, u], None, body);
    let ast = b.finish();

    assert_eq!(render_default(&ast, n), "n: int");
    assert_eq!(render_default(&ast, v), "v");
    assert_eq!(render_default(&ast, u), "u");
    assert_eq!(render_default(&ast, f), "function f(n: int, v, u) =\n  0");
}

#[test]
fn renderer_appends_to_context() {
    let mut b = AstBuilder::new();
    let one = b.int(1);
    let two = b.int(2);
    let ast = b.finish();

    let mut renderer = Renderer::new(&ast, RenderConfig::default());
    assert!(renderer.render(one.into()).is_ok());
    assert!(renderer.render(two.into()).is_ok());
    assert_eq!(renderer.into_context().output(), "12");
}

#[test]
fn renderer_continues_existing_indentation() {
    let mut b = AstBuilder::new();
    let one = b.int(1);
    let two = b.int(2);
    let seq = b.seq([one, two]);
    let ast = b.finish();

    let mut ctx = RenderContext::new();
    ctx.emit("x :=");
    ctx.indent_newline();
    let mut renderer = Renderer::with_context(&ast, ctx);
    assert!(renderer.render(seq.into()).is_ok());
    assert_eq!(
        renderer.into_context().output(),
        "x :=\n  (\n    1;\n    2\n  )"
    );
}

#[test]
fn declaration_root() {
    let mut b = AstBuilder::new();
    let init = b.int(5);
    let x = b.var("x", init);
    let ast = b.finish();

    assert_eq!(render_default(&ast, x), "var x := 5");
}

#[test]
fn deeply_nested_binary() {
    let depth = 20_000;
    let mut b = AstBuilder::new();
    let mut acc = b.int(0);
    for _ in 0..depth {
        let one = b.int(1);
        acc = b.binary(BinaryOp::Add, acc, one);
    }
    let ast = b.finish();

    let text = render_default(&ast, acc);
    assert_eq!(text.matches('(').count(), depth);
    assert!(text.starts_with("((("));
    assert!(text.ends_with(" + 1)"));
}

#[test]
fn missing_loop_bound_reports_loop_location() {
    let mut b = AstBuilder::new();
    let i = b.param("i", None);
    let high = b.int(3);
    let body = b.int(0);
    b.at(9, 4);
    let looped = b.for_loop(i, high, body);
    let ast = b.finish();

    let err = render_to_string(&ast, looped, RenderConfig::default())
        .err()
        .map(|err| (err.violation(), err.to_string()));
    assert_eq!(
        err,
        Some((
            Some(Violation::MissingLoopBound),
            "9:4: internal error: for loop variable has no initial value".to_string()
        ))
    );
}
