use crate::{Engine, Error, RuleSet, TransformId};

fn check(set: RuleSet, cases: &[(&str, Option<(TransformId, &str)>)]) {
    let engine = Engine::with_rule_set(set);
    for (input, expected) in cases {
        let res = engine.match_input(input);
        let got = res.output.as_deref().map(|out| (res.transform_id, out));
        assert_eq!(got, *expected, "{set} input {input:?}");
    }
}

#[test]
fn every_builtin_pair_compiles() {
    for set in [RuleSet::Python, RuleSet::Go] {
        let engine = Engine::new();
        assert_eq!(engine.load_rule_set(set), set.pairs().len(), "{set}");
    }
}

#[test]
fn python_rules() {
    let cases: Vec<(&str, Option<(TransformId, &str)>)> = vec![
        ("def run():", Some((1, r"def \1(self):"))),
        ("def  run ( ) :", Some((1, r"def \1(self):"))),
        ("class Foo:", Some((2, r"class \1(RiftObject):"))),
        ("total := a + b", Some((3, r"self.\1 = \2"))),
        ("@quantum", Some((4, "@rift_quantum_decorator"))),
        // walrus (80) beats class (90)
        ("class Foo: x := 1", Some((3, r"self.\1 = \2"))),
        // def (100) beats @quantum (200)
        ("@quantum def f():", Some((1, r"def \1(self):"))),
        ("print(1)", None),
        ("def run(x):", None),
    ];
    check(RuleSet::Python, &cases);
}

#[test]
fn go_rules() {
    let cases: Vec<(&str, Option<(TransformId, &str)>)> = vec![
        ("var count int", Some((1, r#"riftVar$2("$1")"#))),
        ("func main()", Some((2, r#"riftFunc("$1", func()"#))),
        ("go worker()", Some((3, r#"riftGo(riftFunc("$1", func()"#))),
        ("const limit = 10", Some((4, r#"riftConst("$1", $2)"#))),
        ("type Point struct {", Some((5, r#"riftStruct("$1", struct"#))),
        ("@quantum", Some((6, "@riftQuantumDecorator"))),
        // func (90) beats var (100)
        ("func main() { var x int }", Some((2, r#"riftFunc("$1", func()"#))),
        ("fmt.Println(x)", None),
    ];
    check(RuleSet::Go, &cases);
}

#[test]
fn rule_set_names_round_trip() {
    for set in [RuleSet::Python, RuleSet::Go] {
        assert_eq!(set.name().parse::<RuleSet>().unwrap(), set);
        assert_eq!(set.to_string(), set.name());
    }
    assert_eq!("PY".parse::<RuleSet>().unwrap(), RuleSet::Python);
    assert_eq!("golang".parse::<RuleSet>().unwrap(), RuleSet::Go);
}

#[test]
fn unknown_rule_set_is_rejected() {
    let err = "cobol".parse::<RuleSet>().unwrap_err();
    assert!(matches!(err, Error::UnknownRuleSet(name) if name == "cobol"));
}
