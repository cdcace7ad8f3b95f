/*!
# `FOR <variable> = <expression> TO <expression> [STEP <expression>]`

## Purpose
Repeat the statements up to the matching `NEXT`.

## Remarks
The variable is set to the first value and the body always runs at least
once. Each `NEXT` adds the step, 1 when omitted, and loops again unless
the variable would pass the limit. When the loop finishes the variable
keeps the last value the body saw.

Starting a `FOR` on a variable that already has a loop replaces it.

## Example
```text
10 FOR I = 1 TO 10 STEP 2
20 PLOT I * 10, 50
30 NEXT I
```

*/
