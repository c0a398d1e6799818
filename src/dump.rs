//! Environment dump: a structured, deterministic JSON rendering of the
//! final global environment (spec §6). The schema is fixed concretely here
//! (spec calls it "advisory") — see `SPEC_FULL.md` §6 for the shape.
//!
//! Each kernel expression serializes as `{"tag": "<constructor>", ...fields}`
//! via `serde`'s internally-tagged enum representation. `Ident`s are
//! rendered by resolved name, not raw symbol index, so the dump is
//! readable without the interner.

use serde::Serialize;

use postulate_kernel::{Environment, Term};

/// The top-level dump: every declared name, in first-declaration order,
/// with its current (possibly later-shadowing) binding.
#[derive(Serialize)]
pub struct EnvironmentDump {
    pub declarations: Vec<DeclarationDump>,
}

#[derive(Serialize)]
pub struct DeclarationDump {
    pub name: String,
    pub ty: TermDump,
    pub def: Option<TermDump>,
}

/// A kernel expression, tagged by constructor for the dump.
#[derive(Serialize)]
#[serde(tag = "tag")]
pub enum TermDump {
    Ident { name: String },
    Ref { index: usize },
    App { fun: Box<TermDump>, arg: Box<TermDump> },
    Lambda { head: Box<TermDump>, body: Box<TermDump> },
    Pi { head: Box<TermDump>, body: Box<TermDump> },
    Error,
    Sorry,
}

fn term_dump(env: &Environment, term: &Term) -> TermDump {
    match term {
        Term::Ident(sym) => TermDump::Ident {
            name: env.resolve_name(*sym).to_string(),
        },
        Term::Ref(i) => TermDump::Ref { index: *i },
        Term::App(f, v) => TermDump::App {
            fun: Box::new(term_dump(env, f)),
            arg: Box::new(term_dump(env, v)),
        },
        Term::Lambda { head, body } => TermDump::Lambda {
            head: Box::new(term_dump(env, head)),
            body: Box::new(term_dump(env, body)),
        },
        Term::Pi { head, body } => TermDump::Pi {
            head: Box::new(term_dump(env, head)),
            body: Box::new(term_dump(env, body)),
        },
        Term::Error => TermDump::Error,
        Term::Sorry => TermDump::Sorry,
    }
}

/// Builds the dump for `env`: one entry per name in first-declaration
/// order, using each name's *current* binding — exactly what a live
/// `Environment::lookup` would return, per spec §3's shadow-by-reparse
/// invariant.
pub fn environment_to_dump(env: &Environment) -> EnvironmentDump {
    let mut seen = std::collections::HashSet::new();
    let mut declarations = Vec::new();

    for decl in env.declarations() {
        if !seen.insert(decl.name) {
            continue;
        }
        let current = env
            .lookup(decl.name)
            .expect("a name present in declaration history has a current binding");
        declarations.push(DeclarationDump {
            name: env.resolve_name(decl.name).to_string(),
            ty: term_dump(env, &current.ty),
            def: current.def.as_ref().map(|d| term_dump(env, d)),
        });
    }

    EnvironmentDump { declarations }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_json(env: &Environment) -> serde_json::Value {
        serde_json::to_value(environment_to_dump(env)).unwrap()
    }

    #[test]
    fn dump_includes_seeded_type_and_sorry() {
        let env = Environment::new();
        let value = as_json(&env);
        let decls = value["declarations"].as_array().unwrap();
        let names: Vec<&str> = decls.iter().map(|d| d["name"].as_str().unwrap()).collect();
        assert!(names.contains(&"Type"));
        assert!(names.contains(&"SORRY"));
    }

    #[test]
    fn axiom_has_null_def() {
        let mut env = Environment::new();
        let type_sym = env.type_symbol();
        let nat = env.interner().intern("Nat");
        env.declare(nat, Term::Ident(type_sym), None);

        let value = as_json(&env);
        let decls = value["declarations"].as_array().unwrap();
        let nat_entry = decls.iter().find(|d| d["name"] == "Nat").unwrap();
        assert!(nat_entry["def"].is_null());
        assert_eq!(nat_entry["ty"]["tag"], "Ident");
        assert_eq!(nat_entry["ty"]["name"], "Type");
    }

    #[test]
    fn definition_serializes_its_body() {
        let mut env = Environment::new();
        let type_sym = env.type_symbol();
        let nat = env.interner().intern("Nat");
        env.declare(nat, Term::Ident(type_sym), None);
        let zero = env.interner().intern("zero");
        env.declare(zero, Term::Ident(nat), Some(Term::Ident(nat)));

        let value = as_json(&env);
        let decls = value["declarations"].as_array().unwrap();
        let zero_entry = decls.iter().find(|d| d["name"] == "zero").unwrap();
        assert_eq!(zero_entry["def"]["tag"], "Ident");
        assert_eq!(zero_entry["def"]["name"], "Nat");
    }

    #[test]
    fn shadowed_name_dumps_only_its_latest_binding() {
        let mut env = Environment::new();
        let type_sym = env.type_symbol();
        let x = env.interner().intern("x");
        env.declare(x, Term::Ident(type_sym), None);
        env.declare(x, Term::Ref(1), Some(Term::Ref(1)));

        let value = as_json(&env);
        let decls = value["declarations"].as_array().unwrap();
        let xs: Vec<&serde_json::Value> = decls.iter().filter(|d| d["name"] == "x").collect();
        assert_eq!(xs.len(), 1);
        assert_eq!(xs[0]["ty"]["tag"], "Ref");
    }
}
