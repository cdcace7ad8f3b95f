/*!
# Expressions

Every value is a floating point number. Variables are named with letters
followed by optional digits, case does not matter, and a variable that
was never assigned reads as zero.

`TO`, `STEP`, `THEN`, `SIN` and `COS` are recognised as soon as their
letters appear, even inside a longer name. `TOTAL` reads as `TO TAL`, so
avoid names that start with one of them.

## Operators
From loosest to tightest binding:

| Operators | Meaning |
|-----------|---------|
| `= <> < <= > >=` | Comparison, giving 1 for true and 0 for false |
| `+ -` | Addition and subtraction |
| `* /` | Multiplication and division |
| `-` `SIN` `COS` | Negation and trigonometry in radians |

Parentheses group as usual. Operators of equal priority evaluate left to
right, so `1-2-3` is `-4`.

Dividing by zero does not stop the program. The result is infinity, or
not a number for `0/0`.

## RND
`RND` reads as a new random number between 0 and 1 every time it is
evaluated. `RANDOMIZE` with a seed makes the sequence repeat.

```text
10 FOR I = 1 TO 100
20 PLOT RND * 256, RND * 176
30 NEXT I
```

*/
