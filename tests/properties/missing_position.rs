//! Property tests for declarations that arrive without a source position.

use proptest::prelude::*;

use herald::domain::entities::{
    Declaration, DeclarationHeader, Expression, Marker, MarkerArguments, MemberDeclaration,
    SourceTree, TypeDeclaration, TypeRef, Variable,
};
use herald::domain::services::DeclarationCollector;
use herald::{DeclarationKind, HeraldError, MarkerName, SourceCode};

fn marked_header() -> DeclarationHeader {
    DeclarationHeader {
        markers: vec![Marker::new(
            "herald.annotations.NotifyChanges",
            MarkerArguments::Single(Expression::StringLiteral("alice".into())),
        )],
        ..Default::default()
    }
}

fn unpositioned(kind: DeclarationKind, name: &str) -> Declaration {
    let header = marked_header();
    match kind {
        DeclarationKind::Type => Declaration::type_decl(name, header),
        DeclarationKind::Method => Declaration::method(name, header),
        DeclarationKind::Constructor => Declaration::constructor(name, header),
        DeclarationKind::Field => Declaration::field(
            header,
            TypeRef::new("int", 0),
            vec![Variable::new(name, None)],
        ),
        DeclarationKind::MarkerDeclaration => Declaration::MarkerDeclaration(TypeDeclaration {
            name: name.to_string(),
            header,
            members: Vec::new(),
        }),
        DeclarationKind::MarkerMember => Declaration::MarkerMember(MemberDeclaration {
            name: name.to_string(),
            header,
            members: Vec::new(),
        }),
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A marked declaration of any kind without a position fails collection.
    #[test]
    fn property_missing_position_for_every_kind(
        kind in proptest::sample::select(DeclarationKind::all().to_vec()),
        name in "[a-z][a-zA-Z0-9]{0,10}",
    ) {
        let tree = SourceTree {
            package: None,
            imports: Vec::new(),
            declarations: vec![unpositioned(kind, &name)],
        };
        let source = SourceCode::from_content("Gen.java", "class Gen {}\n");

        let result = DeclarationCollector::new(MarkerName::default()).collect(&source, &tree);
        prop_assert!(
            matches!(&result, Err(HeraldError::MissingPosition { name: n }) if n == &name),
            "unexpected result for {}: {:?}",
            kind,
            result
        );
    }
}
