#[macro_use]
mod common;

#[cfg(test)]
mod inheritance {
    tests! {
        inherit_method in inheritance is OK
        "a"
    }

    tests! {
        super_call in inheritance is OK
        "a"
        "b"
    }

    tests! {
        inherited_init in inheritance is OK
        "x"
    }

    tests! {
        overridden_method in inheritance is OK
        "B"
    }

    tests! {
        self_inherit in inheritance is ERR
        "Resolve Error - Can't inherit from self"
        "Lexeme - A"
        "Position - (1, 11)"
    }

    tests! {
        superclass_must_be_class in inheritance is ERR
        "Runtime Error - Superclass must be a class"
        "Lexeme - NotAClass"
        "Position - (2, 13)"
    }
}
