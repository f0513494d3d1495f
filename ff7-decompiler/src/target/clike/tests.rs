use super::*;

#[test]
fn if_shape_uses_braces() {
    let target = CLikeTarget;
    assert_eq!(target.if_open("x == 1"), "if (x == 1) {");
    assert_eq!(target.if_close(), "}");
}

#[test]
fn coalesced_else_fuses_close_and_if_into_one_line() {
    let target = CLikeTarget;
    assert_eq!(target.else_if_open("x == 2"), "} else if (x == 2) {");
}

#[test]
fn do_while_closes_with_trailing_semicolon() {
    let target = CLikeTarget;
    assert_eq!(target.do_close("x < 5"), "} while (x < 5);");
}

#[test]
fn call_joins_args_with_comma_space() {
    let target = CLikeTarget;
    assert_eq!(target.call("message", &["1".to_string(), "2".to_string()]), "message(1, 2)");
}

#[test]
fn bin_op_order_is_lifo_call_order_is_fifo() {
    let target = CLikeTarget;
    assert_eq!(target.bin_op_arg_order(), ArgOrder::Lifo);
    assert_eq!(target.call_arg_order(), ArgOrder::Fifo);
}

#[test]
fn function_and_entity_wrappers_use_class_syntax() {
    let target = CLikeTarget;
    assert_eq!(target.function_open("init"), "void init() {");
    assert_eq!(target.function_close(), "}");
    assert_eq!(target.entity_open("Cloud"), "class Cloud {");
    assert_eq!(target.entity_close(), "};");
}
