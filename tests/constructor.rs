#[macro_use]
mod common;

#[cfg(test)]
mod constructor {
    tests! {
        fields in constructor is OK
        "1"
    }

    tests! {
        early_return in constructor is OK
        "true"
    }

    tests! {
        call_init_directly in constructor is OK
        "1"
        "<instance A>"
        "2"
    }

    tests! {
        return_value in constructor is ERR
        "Resolve Error - Can't return value from init"
        "Lexeme - return"
        "Position - (3, 5)"
    }

    tests! {
        default_arity in constructor is ERR
        "Runtime Error - Arity = 0"
        "Lexeme - )"
        "Position - (2, 12)"
    }
}
