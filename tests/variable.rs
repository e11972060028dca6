#[macro_use]
mod common;

#[cfg(test)]
mod variable {
    tests! {
        redeclare_global in variable is OK
        "2"
    }

    tests! {
        uninitialized in variable is OK
        "nil"
    }

    tests! {
        shadow in variable is OK
        "shadow"
        "global"
    }

    tests! {
        global_in_initializer in variable is OK
        "value"
    }

    tests! {
        undefined_global in variable is ERR
        "Runtime Error - Undefined variable"
        "Lexeme - notDefined"
        "Position - (1, 7)"
    }

    tests! {
        duplicate_local in variable is ERR
        "Resolve Error - Variable already declared"
        "Lexeme - a"
        "Position - (3, 7)"
    }

    tests! {
        own_initializer in variable is ERR
        "Resolve Error - Can't read local variable in its own initializer"
        "Lexeme - a"
        "Position - (3, 11)"
    }

    tests! {
        keyword_as_name in variable is ERR
        "Parse Error - Expected var name"
        "Lexeme - false"
        "Position - (1, 5)"
    }
}
