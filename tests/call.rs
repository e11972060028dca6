#[macro_use]
mod common;

#[cfg(test)]
mod call {
    tests! {
        chain in call is OK
        "3"
    }

    tests! {
        string in call is ERR
        "Runtime Error - Calling non-function/non-class"
        "Lexeme - )"
        "Position - (2, 3)"
    }

    tests! {
        nil_call in call is ERR
        "Runtime Error - Calling non-function/non-class"
        "Lexeme - )"
        "Position - (1, 5)"
    }

    tests! {
        arity in call is ERR
        "Runtime Error - Arity = 2"
        "Lexeme - )"
        "Position - (4, 12)"
    }
}
