#[macro_use]
mod common;

#[cfg(test)]
mod field {
    tests! {
        get_set in field is OK
        "3"
    }

    tests! {
        method_then_field in field is OK
        "method"
        "field"
    }

    tests! {
        undefined in field is ERR
        "Runtime Error - Undefined property"
        "Lexeme - bar"
        "Position - (3, 11)"
    }

    tests! {
        set_on_non_instance in field is ERR
        "Runtime Error - Only instances have fields"
        "Lexeme - b"
        "Position - (2, 3)"
    }

    tests! {
        get_on_non_instance in field is ERR
        "Runtime Error - Only instances have fields"
        "Lexeme - b"
        "Position - (1, 12)"
    }
}
