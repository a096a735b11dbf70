//! Resolution semantics: singletons, aliases, factories, classes, cycles

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use plinth_domain::error::{Error, Result};
use plinth_domain::value_objects::{
    Binding, Dependency, Deps, Injectable, Strategy, Token, into_instance, service_address,
};
use plinth_infrastructure::di::{ContextBuilder, PlatformContext};

trait Greeter: Send + Sync {
    fn greet(&self) -> String;
}

trait Farewell: Send + Sync {
    fn bye(&self) -> String;
}

struct EnglishGreeter {
    name: Arc<String>,
}

impl Greeter for EnglishGreeter {
    fn greet(&self) -> String {
        format!("hello {}", self.name)
    }
}

impl Farewell for EnglishGreeter {
    fn bye(&self) -> String {
        format!("bye {}", self.name)
    }
}

static NAME: once_cell::sync::Lazy<Token<String>> = once_cell::sync::Lazy::new(|| Token::new("Name"));

impl Injectable for EnglishGreeter {
    fn dependencies() -> Vec<Dependency> {
        vec![Dependency::one(&*NAME)]
    }

    fn construct(deps: &Deps) -> Result<Self> {
        Ok(Self {
            name: deps.get(&*NAME)?,
        })
    }
}

fn ready(bindings: Vec<Binding>) -> PlatformContext {
    ContextBuilder::new("resolution")
        .with_bindings(bindings)
        .build()
        .unwrap()
}

#[test]
fn test_singleton_is_shared() {
    let built = Arc::new(AtomicUsize::new(0));
    let counter = built.clone();
    let token: Token<String> = Token::new("Shared");
    let context = ready(vec![token.use_factory(Vec::new(), move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new("shared".to_string()))
    })]);

    let first = context.get(&token).unwrap();
    let second = context.get(&token).unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(built.load(Ordering::SeqCst), 1);
}

#[test]
fn test_transient_builds_every_time() {
    let built = Arc::new(AtomicUsize::new(0));
    let counter = built.clone();
    let token: Token<usize> = Token::new("Ticket");
    let context = ready(vec![
        token
            .use_factory(Vec::new(), move |_| {
                Ok(Arc::new(counter.fetch_add(1, Ordering::SeqCst)))
            })
            .transient(),
    ]);

    assert_eq!(*context.get(&token).unwrap(), 0);
    assert_eq!(*context.get(&token).unwrap(), 1);
    assert_eq!(built.load(Ordering::SeqCst), 2);
}

#[test]
fn test_class_binding_resolves_dependencies() {
    let greeter: Token<dyn Greeter> = Token::new("Greeter");
    let context = ready(vec![
        NAME.use_value(Arc::new("plinth".to_string())),
        greeter.use_class::<EnglishGreeter>(|g| g),
    ]);

    assert_eq!(context.get(&greeter).unwrap().greet(), "hello plinth");
}

#[test]
fn test_alias_is_the_same_instance() {
    let concrete: Token<dyn Greeter> = Token::new("EnglishGreeter");
    let public: Token<dyn Greeter> = Token::new("Greeter");
    let context = ready(vec![
        NAME.use_value(Arc::new("alias".to_string())),
        concrete.use_class::<EnglishGreeter>(|g| g),
        public.use_existing(&concrete),
    ]);

    let via_alias = context.get(&public).unwrap();
    let direct = context.get(&concrete).unwrap();
    assert!(Arc::ptr_eq(&via_alias, &direct));
}

#[test]
fn test_alias_across_types_shares_the_object() {
    let concrete: Token<EnglishGreeter> = Token::new("EnglishGreeter");
    let greeter: Token<dyn Greeter> = Token::new("Greeter");
    let farewell: Token<dyn Farewell> = Token::new("Farewell");
    let context = ready(vec![
        NAME.use_value(Arc::new("both".to_string())),
        concrete.use_class::<EnglishGreeter>(|g| g),
        greeter.use_existing_as(&concrete, |g| g),
        farewell.use_existing_as(&concrete, |g| g),
    ]);

    let concrete = context.get(&concrete).unwrap();
    let greeter = context.get(&greeter).unwrap();
    let farewell = context.get(&farewell).unwrap();
    assert_eq!(service_address(&concrete), service_address(&greeter));
    assert_eq!(service_address(&greeter), service_address(&farewell));
    assert_eq!(farewell.bye(), "bye both");
}

#[test]
fn test_alias_to_unbound_identity_fails_at_resolution() {
    let target: Token<u8> = Token::new("Target");
    let alias: Token<u8> = Token::new("Alias");
    let context = ready(vec![alias.use_existing(&target)]);

    let err = context.get(&alias).unwrap_err();
    assert!(matches!(err, Error::UnknownIdentity { ref identity } if identity == "Target"));
}

#[test]
fn test_unknown_identity() {
    let missing: Token<u8> = Token::new("Missing");
    let context = ready(Vec::new());

    assert!(context.get(&missing).unwrap_err().is_unknown_identity());
    assert!(context.get_optional(&missing).unwrap().is_none());
    assert_eq!(*context.get_or(&missing, Arc::new(9)).unwrap(), 9);
}

#[test]
fn test_cycle_is_reported_with_path() {
    let a: Token<u8> = Token::new("A");
    let b: Token<u8> = Token::new("B");
    let c: Token<u8> = Token::new("C");
    let (a2, b2, c2) = (a, b, c);
    let context = ready(vec![
        a.use_factory(vec![Dependency::one(&b)], move |deps| deps.get(&b2)),
        b.use_factory(vec![Dependency::one(&c)], move |deps| deps.get(&c2)),
        c.use_factory(vec![Dependency::one(&a)], move |deps| deps.get(&a2)),
    ]);

    match context.get(&a).unwrap_err() {
        Error::CyclicDependency { path } => assert_eq!(path, vec!["A", "B", "C", "A"]),
        other => panic!("unexpected error: {other}"),
    }
    // The failed attempt leaves nothing half-built behind
    assert!(matches!(context.get(&b).unwrap_err(), Error::CyclicDependency { .. }));
}

#[test]
fn test_self_alias_is_a_cycle() {
    let token: Token<u8> = Token::new("Narcissus");
    let context = ready(vec![token.use_existing(&token)]);

    match context.get(&token).unwrap_err() {
        Error::CyclicDependency { path } => assert_eq!(path, vec!["Narcissus", "Narcissus"]),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_factory_error_propagates_unchanged() {
    let token: Token<u8> = Token::new("Broken");
    let context = ready(vec![token.use_factory(Vec::new(), |_| {
        Err(Error::configuration("factory refused"))
    })]);

    let err = context.get(&token).unwrap_err();
    assert!(matches!(err, Error::Configuration { ref message, .. } if message == "factory refused"));
}

#[test]
fn test_type_mismatch_is_reported() {
    let token: Token<String> = Token::new("Wrong");
    let context = ready(vec![Binding::new(
        token.identity(),
        Strategy::UseValue(into_instance(Arc::new(7u8))),
    )]);

    assert!(matches!(context.get(&token).unwrap_err(), Error::TypeMismatch { .. }));
}

#[test]
fn test_multi_dependency_keeps_order() {
    let part: Token<&'static str> = Token::new("Part");
    let joined: Token<String> = Token::new("Joined");
    let part2 = part;
    let context = ready(vec![
        part.use_value(Arc::new("a")).multi(),
        part.use_value(Arc::new("b")).multi(),
        joined.use_factory(vec![Dependency::all(&part)], move |deps| {
            let parts: Vec<&str> = deps.get_all(&part2)?.iter().map(|p| **p).collect();
            Ok(Arc::new(parts.join(",")))
        }),
        part.use_value(Arc::new("c")).multi(),
    ]);

    assert_eq!(context.get(&joined).unwrap().as_str(), "a,b,c");
    let direct: Vec<&str> = context.get_all(&part).unwrap().iter().map(|p| **p).collect();
    assert_eq!(direct, vec!["a", "b", "c"]);
}

#[test]
fn test_optional_dependency() {
    let absent: Token<u8> = Token::new("Absent");
    let summary: Token<String> = Token::new("Summary");
    let absent2 = absent;
    let context = ready(vec![summary.use_factory(
        vec![Dependency::optional(&absent)],
        move |deps| {
            let value = deps.get_optional(&absent2)?;
            Ok(Arc::new(format!("{:?}", value.map(|v| *v))))
        },
    )]);

    assert_eq!(context.get(&summary).unwrap().as_str(), "None");
}

#[test]
fn test_single_resolution_of_multi_identity_is_rejected() {
    let plugin: Token<u8> = Token::new("Plugin");
    let context = ready(vec![plugin.use_value(Arc::new(1)).multi()]);

    assert!(matches!(context.get(&plugin).unwrap_err(), Error::Configuration { .. }));
}

#[test]
fn test_diamond_shares_base_across_concurrent_first_resolution() {
    let base: Token<u32> = Token::new("Base");
    let left: Token<u32> = Token::new("Left");
    let right: Token<u32> = Token::new("Right");
    let top: Token<u32> = Token::new("Top");
    let built = Arc::new(AtomicUsize::new(0));
    let counter = built.clone();

    let context = ready(vec![
        base.use_factory(Vec::new(), move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            std::thread::sleep(std::time::Duration::from_millis(5));
            Ok(Arc::new(1))
        }),
        left.use_factory(vec![Dependency::one(&base)], move |deps| {
            Ok(Arc::new(*deps.get(&base)? + 1))
        }),
        right.use_factory(vec![Dependency::one(&base)], move |deps| {
            Ok(Arc::new(*deps.get(&base)? + 2))
        }),
        top.use_factory(
            vec![Dependency::one(&left), Dependency::one(&right)],
            move |deps| Ok(Arc::new(*deps.get(&left)? + *deps.get(&right)?)),
        ),
    ]);

    let values: Vec<u32> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| *context.get(&top).unwrap()))
            .collect();
        handles.into_iter().map(|handle| handle.join().unwrap()).collect()
    });

    assert_eq!(values, vec![5; 8]);
    assert_eq!(built.load(Ordering::SeqCst), 1);
    let first = context.get(&base).unwrap();
    assert!(Arc::ptr_eq(&first, &context.get(&base).unwrap()));
}
