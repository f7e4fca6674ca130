use std::{cell::RefCell, collections::HashMap, sync::Arc};

use fieldkit::{
    access,
    introspect::Type as _,
    meta::{Annotation, Collection, Type, Visibility},
    query, TypeInfo,
};

pub struct Id;
impl Annotation for Id {}

pub struct Column;
impl Annotation for Column {}

pub trait Auditable {}

mod markers {
    pub struct Entity;
    impl fieldkit::meta::Annotation for Entity {}
}

#[test]
fn named_struct_type_info() {
    let info = Person::type_info();
    assert_eq!(info.name(), "type_info_derive::Person");

    let fields = info.fields();
    assert_eq!(fields.len(), 3);

    assert_eq!(fields[0].name(), "name");
    assert_eq!(fields[0].ty(), &Type::String);

    assert_eq!(fields[1].name(), "age");
    assert_eq!(fields[1].ty(), &Type::I32);

    assert_eq!(fields[2].name(), "active");
    assert_eq!(fields[2].ty(), &Type::Bool);

    for field in fields {
        assert_eq!(field.owner(), info);
    }
}

#[test]
fn unit_struct_type_info() {
    assert!(Unit::type_info().fields().is_empty());
    assert!(!query::has_default_constructor(Unit::type_info()));
}

#[test]
fn complex_field_types() {
    let info = Complex::type_info();
    let fields = info.fields();
    assert_eq!(fields.len(), 6);

    match fields[1].ty() {
        Type::Optional(inner) => assert_eq!(*inner, &Type::String),
        _ => panic!("Expected optional type for description"),
    }
    assert_eq!(
        fields[2].ty(),
        &Type::Collection(Collection::Vec, &Type::String)
    );
    assert_eq!(fields[3].ty(), &Type::Map(&Type::String, &Type::F64));
    assert_eq!(fields[4].ty(), &Type::Shared(&Type::String));
    assert_eq!(
        fields[5].ty(),
        &Type::Custom("type_info_derive::Person")
    );
    assert_eq!(fields[5].ty(), Person::TYPE);
}

#[test]
fn modifiers_and_visibility() {
    let info = Flags::type_info();

    let id = info.field("id").unwrap();
    assert_eq!(id.visibility(), Visibility::Public);
    assert!(!id.modifiers().is_static());
    assert!(!id.modifiers().is_transient());

    let counter = info.field("counter").unwrap();
    assert_eq!(counter.visibility(), Visibility::Restricted);
    assert!(counter.modifiers().is_static());

    let scratch = info.field("scratch").unwrap();
    assert!(scratch.modifiers().is_transient());
    assert!(!scratch.modifiers().is_static());

    let both = info.field("both").unwrap();
    assert!(both.modifiers().is_static() && both.modifiers().is_transient());

    let cache = info.field("cache").unwrap();
    assert_eq!(cache.visibility(), Visibility::Opaque);
    assert_eq!(cache.ty(), &Type::Opaque("RefCell<Vec<u8>>"));
    assert!(!cache.is_accessible());
}

#[test]
fn type_attributes() {
    let info = Flags::type_info();

    assert!(query::is_annotated::<markers::Entity>(info));
    assert_eq!(info.annotations()[0].name(), "markers::Entity");
    assert!(query::implements::<dyn Auditable>(info));
    assert_eq!(info.interfaces()[0].name(), "Auditable");
    assert!(query::has_method(info, "audit"));
    assert!(query::has_method(info, "type"));
    assert!(query::has_default_constructor(info));
}

#[test]
fn field_annotations() {
    let info = Flags::type_info();

    let id = info.field("id").unwrap();
    assert!(query::is_field_annotated::<Id>(id));
    assert!(query::is_field_annotated::<Column>(id));
    assert!(!query::is_field_annotated::<markers::Entity>(id));

    let scratch = info.field("scratch").unwrap();
    assert!(scratch.annotations().is_empty());
}

#[test]
fn raw_identifiers() {
    let info = Raw::type_info();
    assert_eq!(info.fields()[0].name(), "type");
    assert!(query::has_field(info, "type"));
}

#[test]
fn descriptor_serialization() {
    let json = serde_json::to_value(Flags::type_info()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "type_info_derive::Flags",
            "fields": ["id: i64", "cache: RefCell<Vec<u8>>"],
        })
    );
}

#[test]
fn descriptor_display() {
    assert_eq!(
        Person::type_info().to_string(),
        "type_info_derive::Person { name: String, age: i32, active: bool }"
    );
    assert_eq!(Unit::type_info().to_string(), "type_info_derive::Unit {}");
}

#[test]
fn field_named_like_generated_items() {
    let info = Document::type_info();
    let names: Vec<_> = info.fields().iter().map(|field| field.name()).collect();
    assert_eq!(names, ["id", "refs", "fields", "type_info"]);

    let refs = info.field("refs").unwrap();
    assert_eq!(refs.ty(), &Type::Collection(Collection::Vec, &Type::String));

    let document = Document {
        refs: vec![String::from("a")],
        ..Default::default()
    };
    let value = access::get(refs, &document).unwrap();
    assert_eq!(*value.downcast::<Vec<String>>().unwrap(), ["a"]);
}

#[test]
fn self_referencing_field() {
    let next = Node::type_info().field("next").unwrap();
    assert_eq!(next.ty(), &Type::Optional(Node::TYPE));

    let mut head = Node {
        value: 1,
        next: None,
    };
    let tail = Node {
        value: 2,
        next: None,
    };
    access::set(Box::new(Some(Box::new(tail))), next, &mut head);
    assert_eq!(head.next.map(|node| node.value), Some(2));
}

#[test_log::test]
fn inaccessible_fields_fail_soft() {
    let mut flags = Flags::default();
    flags.cache.borrow_mut().push(1);
    let cache = Flags::type_info().field("cache").unwrap();

    assert!(access::get(cache, &flags).is_none());
    access::set(Box::new(RefCell::new(Vec::<u8>::new())), cache, &mut flags);
    assert_eq!(*flags.cache.borrow(), [1]);

    // A value of the wrong type leaves the field unchanged.
    let mut document = Document {
        id: 3,
        ..Default::default()
    };
    let id = Document::type_info().field("id").unwrap();
    access::set(Box::new(String::from("3")), id, &mut document);
    assert_eq!(document.id, 3);
}

#[derive(Clone, TypeInfo)]
#[allow(unused)]
struct Person {
    name: String,
    age: i32,
    active: bool,
}

#[derive(TypeInfo)]
struct Unit;

#[derive(TypeInfo)]
#[allow(unused)]
struct Complex {
    id: u64,
    description: Option<String>,
    tags: Vec<String>,
    scores: HashMap<String, f64>,
    owner: Arc<String>,
    person: Person,
}

#[derive(Default, TypeInfo)]
#[reflect(annotate(markers::Entity), implements(Auditable))]
#[reflect(methods(audit, r#type), default)]
#[allow(unused)]
struct Flags {
    #[reflect(annotate(Id, Column))]
    pub id: i64,
    #[reflect(static)]
    counter: u32,
    #[reflect(transient)]
    scratch: String,
    #[reflect(static, transient)]
    both: bool,
    #[reflect(opaque)]
    cache: RefCell<Vec<u8>>,
}

impl Auditable for Flags {}

#[derive(TypeInfo)]
#[allow(unused)]
struct Raw {
    r#type: String,
}

#[derive(Clone, Default, TypeInfo)]
#[allow(unused)]
struct Document {
    id: i64,
    refs: Vec<String>,
    fields: Vec<String>,
    type_info: String,
}

#[derive(Clone, TypeInfo)]
struct Node {
    value: i64,
    next: Option<Box<Self>>,
}
