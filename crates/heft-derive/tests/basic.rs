use heft::{estimate_size, PropertyKey, ToValue, Value};

#[test]
fn test_struct_flat() {
    #[derive(ToValue)]
    struct Point {
        x: i32,
        y: i32,
    }

    let p = Point { x: 1, y: 2 };
    assert_eq!(2 * (2 + 8), estimate_size(&p.to_value()));
}

#[test]
fn test_field_order_is_declaration_order() {
    #[derive(ToValue)]
    struct Pair {
        second: u8,
        first: u8,
    }

    let value = Pair { second: 2, first: 1 }.to_value();
    let record = value.as_record().unwrap();
    assert_eq!(
        record.enumerate_keys(),
        vec![PropertyKey::from("second"), PropertyKey::from("first")]
    );
}

#[test]
fn test_tuple() {
    #[derive(ToValue)]
    struct Tuple(i32, i32);

    let p = Tuple(1, 2);
    assert!(matches!(p.to_value(), Value::Array(_)));
    assert_eq!(16, estimate_size(&p.to_value()));
}

#[test]
fn test_struct_generic() {
    #[derive(ToValue)]
    struct Generic<T>
    where
        T: ToValue,
    {
        x: T,
        y: T,
    }

    let g = Generic { x: "ab", y: "cd" };
    assert_eq!(2 * (2 + 4), estimate_size(&g.to_value()));
}

#[test]
fn test_struct_empty() {
    #[derive(ToValue)]
    struct Empty;

    assert_eq!(0, estimate_size(&Empty.to_value()));
}

#[test]
fn test_nested() {
    #[derive(ToValue)]
    struct Inner {
        d: f64,
    }

    #[derive(ToValue)]
    struct Outer {
        a: i32,
        b: i32,
        c: Inner,
    }

    let outer = Outer {
        a: 1,
        b: 2,
        c: Inner { d: 4.0 },
    };
    assert_eq!(4 * 2 + 3 * 8, estimate_size(&outer.to_value()));
}

#[test]
fn test_attributes() {
    #[derive(ToValue)]
    struct Renamed {
        #[heft(rename = "abc")]
        field: &'static str,
        #[heft(skip)]
        #[allow(dead_code)]
        cache: Vec<u64>,
        r#type: bool,
    }

    let value = Renamed {
        field: "def",
        cache: vec![1, 2, 3],
        r#type: true,
    };
    assert_eq!(2 * 3 * 2 + 2 * 4 + 4, estimate_size(&value.to_value()));
}

#[test]
fn test_collections_and_options() {
    #[derive(ToValue)]
    struct Bag {
        items: Vec<&'static str>,
        missing: Option<u32>,
    }

    let bag = Bag {
        items: vec!["a", "b", "c", "d"],
        missing: None,
    };
    assert_eq!(2 * 5 + 8 + 2 * 7, estimate_size(&bag.to_value()));
}
