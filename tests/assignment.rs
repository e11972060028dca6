#[macro_use]
mod common;

#[cfg(test)]
mod assignment {
    tests! {
        associativity in assignment is OK
        "c"
        "c"
        "c"
    }

    tests! {
        global in assignment is OK
        "2"
        "3"
    }

    tests! {
        local in assignment is OK
        "before"
        "after"
    }

    tests! {
        grouping in assignment is ERR
        "Parse Error - Invalid target"
        "Lexeme - ="
        "Position - (2, 5)"
    }

    tests! {
        to_this in assignment is ERR
        "Parse Error - Invalid target"
        "Lexeme - ="
        "Position - (3, 10)"
    }

    tests! {
        undefined in assignment is ERR
        "Runtime Error - Undefined variable"
        "Lexeme - unknown"
        "Position - (1, 1)"
    }
}
