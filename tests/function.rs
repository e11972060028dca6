#[macro_use]
mod common;

#[cfg(test)]
mod function {
    tests! {
        print_function in function is OK
        "<fn foo>"
    }

    tests! {
        print_native in function is OK
        "<native fn clock>"
    }

    tests! {
        params in function is OK
        "6"
    }

    tests! {
        recursion in function is OK
        "55"
    }

    tests! {
        nil_return in function is OK
        "nil"
    }

    tests! {
        local_function in function is OK
        "inner"
    }

    tests! {
        equality in function is OK
        "true"
        "true"
        "false"
    }

    tests! {
        missing_args in function is ERR
        "Runtime Error - Arity = 2"
        "Lexeme - )"
        "Position - (2, 4)"
    }
}
